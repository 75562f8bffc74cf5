//! Event dispatcher.
//!
//! [`Portfolio`] owns every controller and is the only thing the host talks
//! to: it feeds [`InputEvent`]s in and applies the returned [`HostEffect`]s
//! in order. The aggregate scroll-lock flag is compared before and after
//! each event so `SetScrollLock` is emitted only on a real change.

use serde::Serialize;

use folio_content::{ContactKind, ContentStore, Project};
use folio_types::{HostEffect, InputEvent, Key, Target, Theme};

use crate::config::FolioConfig;
use crate::filter::{self, TechFilter};
use crate::modal::{ModalController, ModalView, Step};
use crate::nav::{NavLink, NavigationController};
use crate::reveal::RevealTracker;
use crate::scroll::ScrollObserver;
use crate::scroll_lock::ScrollLock;
use crate::swipe::SwipeTracker;
use crate::theme::{PreferenceStore, ThemeController};

/// Serializable view of the whole presentation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub active_section: &'a str,
    pub nav: Vec<NavLink<'a>>,
    pub menu_open: bool,
    pub modal: ModalView<'a>,
    /// Horizontal drag of the lightbox swipe in progress.
    pub drag_offset: Option<i32>,
    pub theme: Theme,
    pub filter: &'a str,
    pub visible_projects: Vec<&'a str>,
    pub revealed_cards: Vec<&'a str>,
    pub scroll_locked: bool,
}

/// The presentation state of one page.
#[derive(Debug)]
pub struct Portfolio {
    config: FolioConfig,
    content: ContentStore,
    lock: ScrollLock,
    scroll: ScrollObserver,
    nav: NavigationController,
    modal: ModalController,
    swipe: SwipeTracker,
    theme: ThemeController,
    filter: TechFilter,
    reveal: RevealTracker,
    /// Lock flag last reported to the host.
    reported_lock: bool,
}

impl Portfolio {
    /// Build the controllers. The theme is resolved immediately; the host
    /// applies it from [`Portfolio::initial_effects`].
    pub fn new(
        config: FolioConfig,
        content: ContentStore,
        store: Box<dyn PreferenceStore>,
        system_prefers_dark: bool,
    ) -> Self {
        let lock = ScrollLock::new();
        let scroll = ScrollObserver::new(&config.default_section, config.header_offset);
        let nav =
            NavigationController::new(&config.sections, &config.default_section, lock.clone());
        let modal = ModalController::new(lock.clone());
        let swipe = SwipeTracker::new(config.swipe_threshold);
        let theme = ThemeController::init(store, &config.theme_key, system_prefers_dark);
        let reveal = RevealTracker::new(config.reveal_threshold, config.reveal_root_margin);
        log::info!(
            "Portfolio ready: {} sections, {} projects",
            config.sections.len(),
            content.projects().len()
        );
        Self {
            config,
            content,
            lock,
            scroll,
            nav,
            modal,
            swipe,
            theme,
            filter: TechFilter::default(),
            reveal,
            reported_lock: false,
        }
    }

    /// Effects the host applies once at mount.
    pub fn initial_effects(&self) -> Vec<HostEffect> {
        vec![HostEffect::ApplyTheme {
            theme: self.theme.theme(),
        }]
    }

    /// Feed one event through the controllers.
    pub fn dispatch(&mut self, event: InputEvent) -> Vec<HostEffect> {
        let mut fx = Vec::new();
        match event {
            InputEvent::Scroll { y } => {
                let changed = self.scroll.observe(y).map(str::to_string);
                self.announce_active(changed, &mut fx);
                self.reveal_cards(&mut fx);
            },
            InputEvent::Resize { viewport_height } => {
                self.scroll.set_viewport_height(viewport_height);
                self.refresh_active(&mut fx);
                self.reveal_cards(&mut fx);
            },
            InputEvent::SectionMounted { id } => {
                if !self.config.sections.contains(&id) {
                    log::debug!("Section '{id}' has no navigation entry");
                }
                self.scroll.register(&id);
            },
            InputEvent::SectionMeasured { id, top, height } => {
                self.scroll.measure(&id, top, height);
                self.refresh_active(&mut fx);
            },
            InputEvent::SectionUnmounted { id } => {
                let before = self.scroll.active().to_string();
                self.scroll.unregister(&id);
                let after = self.scroll.active();
                let changed = (after != before).then(|| after.to_string());
                self.announce_active(changed, &mut fx);
            },
            InputEvent::CardMeasured { id, top, height } => {
                self.reveal.measure(&id, top, height);
                self.reveal_cards(&mut fx);
            },
            InputEvent::Click { target } => self.click(target, &mut fx),
            InputEvent::Key { key } => self.key(key),
            InputEvent::TouchStart { x } => {
                if self.modal.is_lightbox_open() {
                    self.swipe.start(x);
                }
            },
            InputEvent::TouchMove { x } => self.swipe.move_to(x),
            InputEvent::TouchEnd { x } => {
                if let Some(step) = self.swipe.end(x)
                    && self.modal.is_lightbox_open()
                {
                    self.modal.step(step);
                }
            },
            InputEvent::TouchCancel => self.swipe.cancel(),
        }
        if !self.modal.is_lightbox_open() {
            self.swipe.cancel();
        }
        self.sync_lock(&mut fx);
        fx
    }

    /// Unmount the page. Every guard is dropped with the controllers.
    pub fn teardown(self) -> Vec<HostEffect> {
        let was_locked = self.reported_lock;
        drop(self);
        log::debug!("Portfolio torn down");
        if was_locked {
            vec![HostEffect::SetScrollLock { locked: false }]
        } else {
            Vec::new()
        }
    }

    fn click(&mut self, target: Target, fx: &mut Vec<HostEffect>) {
        match target {
            Target::NavLink { section } => {
                if let Some(req) = self.nav.navigate_to(&section, &self.scroll) {
                    fx.push(HostEffect::ScrollTo {
                        section: req.section,
                        y: req.y,
                        smooth: self.config.smooth_scroll,
                    });
                }
            },
            Target::Hamburger => self.nav.toggle_menu(),
            Target::ThemeToggle => {
                let theme = self.theme.toggle();
                fx.push(HostEffect::ApplyTheme { theme });
            },
            Target::Outside => {
                self.nav.close_menu();
            },
            Target::ViewDetails { project } => {
                self.modal.open_detail(&project, &self.content);
            },
            Target::ToggleDetails { project } => {
                self.modal.toggle_detail(&project, &self.content);
            },
            Target::CloseDetail => {
                self.modal.close_detail();
            },
            Target::Overlay => {
                self.modal.dismiss();
            },
            Target::GalleryImage { index } => {
                self.modal.open_lightbox(index);
            },
            Target::GallerySelect { index } => {
                self.modal.select_image(index);
            },
            Target::LightboxNext => {
                self.modal.step(Step::Next);
            },
            Target::LightboxPrev => {
                self.modal.step(Step::Prev);
            },
            Target::CloseLightbox => {
                self.modal.close_lightbox();
            },
            Target::Filter { tech } => {
                self.filter.select(&tech, &self.content);
            },
            Target::ProjectLink { project, link } => {
                match self.content.project(&project).and_then(|p| p.link(link)) {
                    Some(url) => fx.push(HostEffect::OpenUrl {
                        url: url.to_string(),
                        new_context: true,
                    }),
                    None => log::debug!("Project '{project}' has no {link:?} link"),
                }
            },
            Target::Contact { id } => {
                let Some(entry) = self.content.contact(&id) else {
                    log::warn!("Unknown contact '{id}'");
                    return;
                };
                let new_context = match entry.kind {
                    ContactKind::External => true,
                    ContactKind::Email | ContactKind::Phone => false,
                    ContactKind::Info => return,
                };
                if let Some(url) = entry.link.as_deref().filter(|u| !u.is_empty()) {
                    fx.push(HostEffect::OpenUrl {
                        url: url.to_string(),
                        new_context,
                    });
                }
            },
            Target::DownloadCv => match &self.content.site().cv_path {
                Some(path) => fx.push(HostEffect::Download { path: path.clone() }),
                None => log::debug!("No CV document configured"),
            },
        }
    }

    fn key(&mut self, key: Key) {
        match key {
            Key::Escape => {
                if !self.modal.dismiss() {
                    self.nav.close_menu();
                }
            },
            Key::ArrowLeft => {
                self.modal.step(Step::Prev);
            },
            Key::ArrowRight => {
                self.modal.step(Step::Next);
            },
            // Activation keys arrive from the host as clicks on the
            // focused control.
            Key::Enter | Key::Space => {},
        }
    }

    fn refresh_active(&mut self, fx: &mut Vec<HostEffect>) {
        let changed = self.scroll.refresh().map(str::to_string);
        self.announce_active(changed, fx);
    }

    fn announce_active(&mut self, changed: Option<String>, fx: &mut Vec<HostEffect>) {
        if let Some(section) = changed {
            self.nav.set_active(&section);
            fx.push(HostEffect::ActiveSectionChanged { section });
        }
    }

    fn reveal_cards(&mut self, fx: &mut Vec<HostEffect>) {
        let newly = self
            .reveal
            .update(self.scroll.scroll_y(), self.scroll.viewport_height());
        fx.extend(newly.into_iter().map(|id| HostEffect::CardRevealed { id }));
    }

    fn sync_lock(&mut self, fx: &mut Vec<HostEffect>) {
        let locked = self.lock.is_locked();
        if locked != self.reported_lock {
            self.reported_lock = locked;
            log::debug!("Scroll lock {}", if locked { "on" } else { "off" });
            fx.push(HostEffect::SetScrollLock { locked });
        }
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn active_section(&self) -> &str {
        self.nav.active()
    }

    pub fn nav_links(&self) -> impl Iterator<Item = NavLink<'_>> {
        self.nav.links()
    }

    pub fn is_menu_open(&self) -> bool {
        self.nav.is_menu_open()
    }

    pub fn modal(&self) -> ModalView<'_> {
        self.modal.view()
    }

    /// Whether the lightbox shows next/prev controls.
    pub fn can_cycle(&self) -> bool {
        self.modal.can_cycle()
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn filter(&self) -> &TechFilter {
        &self.filter
    }

    /// Filter chip labels, `All` first.
    pub fn filter_chips(&self) -> Vec<&str> {
        filter::technologies(&self.content)
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        self.filter.visible_projects(&self.content)
    }

    pub fn is_revealed(&self, card: &str) -> bool {
        self.reveal.is_revealed(card)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            active_section: self.nav.active(),
            nav: self.nav_links().collect(),
            menu_open: self.nav.is_menu_open(),
            modal: self.modal.view(),
            drag_offset: self.swipe.drag_offset(),
            theme: self.theme.theme(),
            filter: self.filter.label(),
            visible_projects: self
                .visible_projects()
                .into_iter()
                .map(|p| p.id.as_str())
                .collect(),
            revealed_cards: self.reveal.revealed().collect(),
            scroll_locked: self.lock.is_locked(),
        }
    }
}
