//! Application state for the portfolio TUI.
//!
//! All mutable UI state lives here explicitly: the viewport tracker, the
//! navigation controller, the scroll animator, the keyboard-highlighted
//! nav item, toast and effect managers, and the download channel.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use tokio::sync::mpsc::error::TryRecvError;

use folio_core::{Navigation, Section, ViewportTracker};

use crate::components::{ToastManager, NARROW_WIDTH};
use crate::config::TuiConfig;
use crate::download::{create_download_channel, spawn_download, DownloadEvent};
use crate::effects::reveal::create_section_reveal;
use crate::effects::AppEffectManager;
use crate::scroll::ScrollAnimator;
use crate::views::PageMetrics;

/// Base duration for the smooth scroll triggered by navigation.
const NAV_SCROLL_MS: u64 = 400;
/// Base duration for a section's entrance effect.
const REVEAL_MS: u64 = 450;

/// Main application state.
pub struct App {
    /// Whether to quit
    pub should_quit: bool,
    /// Loaded configuration
    pub config: TuiConfig,
    /// Section visibility and scrolled-past-the-fold tracking
    pub tracker: ViewportTracker,
    /// Active nav item and compact-menu flag
    pub nav: Navigation,
    /// Page scroll offset with smooth-scroll easing
    pub scroll: ScrollAnimator,
    /// Keyboard-highlighted nav item (the hover analog)
    pub highlighted_nav: usize,
    /// Toast notifications (download feedback)
    pub toast_manager: ToastManager,
    /// Animation effects
    pub effect_manager: AppEffectManager,
    /// Page layout from the last draw
    pub metrics: Option<PageMetrics>,
    /// Compact-menu state on the previous frame, for transition effects
    pub previous_menu_open: bool,
    /// Sections whose entrance effect has already played
    animated: BTreeSet<Section>,
    /// Receiver for the in-flight resume download, if any
    download_rx: Option<tokio::sync::mpsc::UnboundedReceiver<DownloadEvent>>,
    downloading: bool,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let mut tracker = ViewportTracker::new();
        tracker.register_all(&Section::ALL);

        Self {
            should_quit: false,
            config,
            tracker,
            nav: Navigation::new(),
            scroll: ScrollAnimator::new(),
            highlighted_nav: 0,
            toast_manager: ToastManager::new(),
            effect_manager: AppEffectManager::new(),
            metrics: None,
            previous_menu_open: false,
            animated: BTreeSet::new(),
            download_rx: None,
            downloading: false,
        }
    }

    /// Whether a resume download is in flight.
    pub fn downloading(&self) -> bool {
        self.downloading
    }

    /// Whether the viewport is too narrow for inline nav links.
    fn is_narrow(&self) -> bool {
        self.metrics
            .as_ref()
            .is_some_and(|metrics| metrics.width < NARROW_WIDTH)
    }

    fn max_scroll(&self) -> u16 {
        self.metrics
            .as_ref()
            .map_or(0, PageMetrics::max_scroll)
    }

    fn page_step(&self) -> i32 {
        self.metrics
            .as_ref()
            .map_or(10, |metrics| i32::from(metrics.viewport_height.saturating_sub(2)).max(1))
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key, KeyCode::Char('c') | KeyCode::Char('d'))
        {
            self.should_quit = true;
            return;
        }

        let nav_count = Section::ALL.len();
        match key {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('m') => {
                // The hamburger only exists on narrow viewports.
                if self.is_narrow() {
                    self.nav.toggle_menu();
                }
            }
            KeyCode::Esc => self.nav.close_menu(),

            KeyCode::Char('d') => self.start_download(),

            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.highlighted_nav = index;
                self.navigate_to(Section::ALL[index].title());
            }
            KeyCode::Enter => {
                self.navigate_to(Section::ALL[self.highlighted_nav].title());
            }

            KeyCode::Left | KeyCode::BackTab => {
                self.highlighted_nav = (self.highlighted_nav + nav_count - 1) % nav_count;
            }
            KeyCode::Right | KeyCode::Tab => {
                self.highlighted_nav = (self.highlighted_nav + 1) % nav_count;
            }

            KeyCode::Up => {
                if self.nav.menu_open() {
                    self.highlighted_nav = (self.highlighted_nav + nav_count - 1) % nav_count;
                } else {
                    let max = self.max_scroll();
                    self.scroll.scroll_by(-1, max);
                }
            }
            KeyCode::Down => {
                if self.nav.menu_open() {
                    self.highlighted_nav = (self.highlighted_nav + 1) % nav_count;
                } else {
                    let max = self.max_scroll();
                    self.scroll.scroll_by(1, max);
                }
            }
            KeyCode::PageUp => {
                let (step, max) = (self.page_step(), self.max_scroll());
                self.scroll.scroll_by(-step, max);
            }
            KeyCode::PageDown => {
                let (step, max) = (self.page_step(), self.max_scroll());
                self.scroll.scroll_by(step, max);
            }
            KeyCode::Home => {
                let ms = self.config.animations.scaled_ms(NAV_SCROLL_MS);
                self.scroll.go_to(0, ms);
            }
            KeyCode::End => {
                let (max, ms) = (self.max_scroll(), self.config.animations.scaled_ms(NAV_SCROLL_MS));
                self.scroll.go_to(max, ms);
            }

            _ => {}
        }
    }

    /// Handles a "navigate to section" request by name.
    ///
    /// Unknown names and sections without a rendered container are silent
    /// no-ops; otherwise the active item updates, the compact menu closes,
    /// and a smooth scroll starts toward the section top.
    pub fn navigate_to(&mut self, name: &str) {
        let Some(metrics) = &self.metrics else {
            return;
        };
        let rendered = metrics.rendered_sections();
        if let Some(request) = self.nav.navigate_to(name, &rendered) {
            if let Some(top) = metrics.section_top(request.target) {
                let target = top.min(metrics.max_scroll());
                let ms = self.config.animations.scaled_ms(NAV_SCROLL_MS);
                self.scroll.go_to(target, ms);
            }
        }
    }

    /// Kicks off the background resume download.
    pub fn start_download(&mut self) {
        if self.downloading {
            self.toast_manager.info("Resume download already running".to_string());
            return;
        }
        let (tx, rx) = create_download_channel();
        spawn_download(self.config.resume.clone(), tx);
        self.download_rx = Some(rx);
        self.downloading = true;
    }

    /// Drains pending download events into toasts. Non-blocking; called
    /// once per frame.
    pub fn poll_download(&mut self) {
        let Some(mut rx) = self.download_rx.take() else {
            return;
        };
        let mut keep = true;
        loop {
            match rx.try_recv() {
                Ok(DownloadEvent::Started) => {
                    self.toast_manager.info("Fetching resume...".to_string());
                }
                Ok(DownloadEvent::Finished(path)) => {
                    self.toast_manager
                        .success(format!("Resume saved to {}", path.display()));
                    self.downloading = false;
                    keep = false;
                    break;
                }
                Ok(DownloadEvent::Failed(error)) => {
                    self.toast_manager
                        .error(format!("Resume download failed: {}", error));
                    self.downloading = false;
                    keep = false;
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.downloading = false;
                    keep = false;
                    break;
                }
            }
        }
        if keep {
            self.download_rx = Some(rx);
        }
    }

    /// Queues entrance effects for sections that crossed the reveal
    /// threshold this frame. Each section animates at most once.
    pub fn trigger_reveal_effects(&mut self, page_area: Rect) {
        let Some(metrics) = self.metrics.clone() else {
            return;
        };
        let offset = self.scroll.offset();
        for extent in &metrics.extents {
            if !self.tracker.is_revealed(extent.section) || self.animated.contains(&extent.section) {
                continue;
            }
            self.animated.insert(extent.section);

            let ms = self.config.animations.scaled_ms(REVEAL_MS);
            if ms == 0 {
                continue;
            }
            if let Some(rect) = metrics.visible_rect(extent, offset, page_area) {
                self.effect_manager
                    .add_effect(create_section_reveal(extent.section, rect, ms));
            }
        }
    }
}
