//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use cr_content::{data_file, Artist, CatalogSource, ContactInfo, PricingPackage, SessionCache, SiteMeta};
use cr_ui::{apply_theme, rail, SectionId, Theme};
use cr_views::{
    AboutSection, ArtistsSection, ContactSection, LandingSection, PricelistSection, Section,
    SiteContext,
};

/// Main application state
struct CrescentialsApp {
    site: SiteContext,
    active: SectionId,

    landing: LandingSection,
    about: AboutSection,
    artists: ArtistsSection,
    pricelist: PricelistSection,
    contact: ContactSection,

    /// Tokio runtime backing content loads and embed prefetches
    _runtime: tokio::runtime::Runtime,
}

impl CrescentialsApp {
    fn new(cc: &eframe::CreationContext<'_>, runtime: tokio::runtime::Runtime, data_dir: PathBuf) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let site = SiteContext {
            artists: Default::default(),
            pricelist: Default::default(),
            contact: Default::default(),
            meta: Default::default(),
            data_dir,
            runtime: runtime.handle().clone(),
        };

        spawn_content_loads(&site, &cc.egui_ctx);

        Self {
            site,
            active: SectionId::Home,
            landing: LandingSection::new(),
            about: AboutSection::new(),
            artists: ArtistsSection::new(),
            pricelist: PricelistSection::new(),
            contact: ContactSection::new(),
            _runtime: runtime,
        }
    }

    fn section_mut(&mut self, id: SectionId) -> &mut dyn Section {
        match id {
            SectionId::Home => &mut self.landing,
            SectionId::About => &mut self.about,
            SectionId::Artists => &mut self.artists,
            SectionId::Pricelist => &mut self.pricelist,
            SectionId::Contact => &mut self.contact,
        }
    }

    fn switch_to(&mut self, next: SectionId) {
        // The outgoing section settles its animations and detaches embeds
        // before the incoming one mounts
        let leaving = self.active;
        self.section_mut(leaving).teardown();
        self.active = next;
        info!(section = next.label(), "section mounted");
    }
}

impl eframe::App for CrescentialsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut switched = None;
        egui::TopBottomPanel::top("site_rail").show(ctx, |ui| {
            ui.add_space(8.0);
            switched = rail(ui, self.active);
            ui.add_space(8.0);
        });
        if let Some(next) = switched {
            self.switch_to(next);
        }

        let site = self.site.clone();
        let active = self.active;
        egui::CentralPanel::default().show(ctx, |ui| {
            self.section_mut(active).ui(ui, &site);
        });
    }
}

/// Kick off the JSON catalog loads; each one fills its shared slot and
/// wakes the UI when it settles
fn spawn_content_loads(site: &SiteContext, egui_ctx: &egui::Context) {
    let cache = Arc::new(SessionCache::new());

    {
        let slot = site.artists.clone();
        let source = data_file(&site.data_dir, "artists.json").with_cache(cache.clone());
        let ui = egui_ctx.clone();
        site.runtime.spawn(async move {
            let result: std::result::Result<Vec<Artist>, _> = source.load().await;
            slot.supply_catalog(result);
            ui.request_repaint();
        });
    }

    {
        let slot = site.pricelist.clone();
        let source = data_file(&site.data_dir, "pricelist.json").with_cache(cache.clone());
        let ui = egui_ctx.clone();
        site.runtime.spawn(async move {
            let result: std::result::Result<Vec<PricingPackage>, _> = source.load().await;
            slot.supply_catalog(result);
            ui.request_repaint();
        });
    }

    {
        let slot = site.contact.clone();
        let source = data_file(&site.data_dir, "contact.json").with_cache(cache.clone());
        let ui = egui_ctx.clone();
        site.runtime.spawn(async move {
            slot.supply_record(source.load_record::<ContactInfo>().await);
            ui.request_repaint();
        });
    }

    {
        let slot = site.meta.clone();
        let source = data_file(&site.data_dir, "site.json").with_cache(cache);
        let ui = egui_ctx.clone();
        site.runtime.spawn(async move {
            slot.supply_record(source.load_record::<SiteMeta>().await);
            ui.request_repaint();
        });
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    info!(data_dir = %data_dir.display(), "starting Crescentials Record");

    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Crescentials Record"),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Crescentials Record",
        options,
        Box::new(move |cc| Box::new(CrescentialsApp::new(cc, runtime, data_dir))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
