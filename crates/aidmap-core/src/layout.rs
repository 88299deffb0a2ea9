//! Pure render description of the layout shell.
//!
//! [`render`] maps a snapshot (props, navigation state, route, capability
//! check) to a [`LayoutView`]. The three decisions the page makes (which
//! header, which route, interactive map or fallback notice) each become a
//! tagged variant the front end matches on once.

use crate::error::CapabilityError;
use crate::i18n::{Text, translate};
use crate::model::{SiteLanguage, ViewState};
use crate::nav::{HeaderPresentation, NavState};
use crate::props::{
    FiltersProps, LanguageProps, ListViewProps, MapProps, MenuMode, NavMenuProps,
    NetworksTableProps, ShellProps,
};
use crate::route::Route;

/// Runtime check for mapping-engine support.
pub trait CapabilityCheck {
    fn supported(&self) -> Result<bool, CapabilityError>;
}

impl<F> CapabilityCheck for F
where
    F: Fn() -> Result<bool, CapabilityError>,
{
    fn supported(&self) -> Result<bool, CapabilityError> {
        self()
    }
}

/// Whole page.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutView {
    /// Network records not loaded yet; render nothing.
    Empty,
    Page {
        header: HeaderView,
        content: ContentView,
        footer: LanguageProps,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum HeaderView {
    Horizontal(NavMenuProps),
    CollapsedIcon,
    Sidebar(NavMenuProps),
}

/// Route content. Exactly one is rendered.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentView {
    NetworksTable(NetworksTableProps),
    About(LanguageProps),
    Resources(LanguageProps),
    Press,
    SiteInformation,
    /// Home with a supported mapping engine.
    Interactive(InteractiveView),
    /// Home without mapping-engine support.
    Unsupported(HomeExtras),
}

impl LayoutView {
    pub fn header(&self) -> Option<&HeaderView> {
        match self {
            LayoutView::Page { header, .. } => Some(header),
            LayoutView::Empty => None,
        }
    }

    pub fn content(&self) -> Option<&ContentView> {
        match self {
            LayoutView::Page { content, .. } => Some(content),
            LayoutView::Empty => None,
        }
    }

    pub fn footer(&self) -> Option<LanguageProps> {
        match self {
            LayoutView::Page { footer, .. } => Some(*footer),
            LayoutView::Empty => None,
        }
    }
}

/// Which subtree a [`ContentView`] mounts.
///
/// Stays the same while only the values inside a variant change, so the
/// front end can keep the mounted subtree and update it in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    NetworksTable,
    About,
    Resources,
    Press,
    SiteInformation,
    Interactive,
    Unsupported,
}

impl ContentView {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentView::NetworksTable(_) => ContentKind::NetworksTable,
            ContentView::About(_) => ContentKind::About,
            ContentView::Resources(_) => ContentKind::Resources,
            ContentView::Press => ContentKind::Press,
            ContentView::SiteInformation => ContentKind::SiteInformation,
            ContentView::Interactive(_) => ContentKind::Interactive,
            ContentView::Unsupported(_) => ContentKind::Unsupported,
        }
    }

    pub fn interactive(&self) -> Option<&InteractiveView> {
        match self {
            ContentView::Interactive(view) => Some(view),
            _ => None,
        }
    }
}

/// Banner, filters, map and list, plus the home-page extras.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractiveView {
    pub filters: FiltersProps,
    pub view_state: ViewState,
    pub map: MapProps,
    pub list: ListViewProps,
    pub extras: HomeExtras,
}

/// Tagline and submission link shown under the home content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeExtras {
    pub site_language: SiteLanguage,
    pub tagline: &'static str,
    pub submit_label: &'static str,
}

impl HomeExtras {
    fn new(site_language: SiteLanguage) -> Self {
        Self {
            site_language,
            tagline: translate(Text::Tagline, site_language),
            submit_label: translate(Text::SubmitButton, site_language),
        }
    }
}

/// Build the page for one snapshot.
pub fn render(
    props: &ShellProps,
    nav: NavState,
    route: Route,
    check: &dyn CapabilityCheck,
) -> LayoutView {
    if props.all_networks.is_empty() {
        return LayoutView::Empty;
    }
    LayoutView::Page {
        header: render_header(props, nav),
        content: render_content(props, route, check),
        footer: props.language(),
    }
}

fn render_header(props: &ShellProps, nav: NavState) -> HeaderView {
    match nav.presentation() {
        HeaderPresentation::HorizontalMenu => {
            HeaderView::Horizontal(props.nav_menu(MenuMode::Horizontal))
        }
        HeaderPresentation::CollapsedIcon => HeaderView::CollapsedIcon,
        HeaderPresentation::InlineSidebar => HeaderView::Sidebar(props.nav_menu(MenuMode::Inline)),
    }
}

fn render_content(props: &ShellProps, route: Route, check: &dyn CapabilityCheck) -> ContentView {
    match route {
        Route::TableView => ContentView::NetworksTable(props.networks_table()),
        Route::About => ContentView::About(props.language()),
        Route::Resources => ContentView::Resources(props.language()),
        Route::Press => ContentView::Press,
        Route::SiteInformation => ContentView::SiteInformation,
        Route::Home => {
            let extras = HomeExtras::new(props.site_language);
            if map_supported(check) {
                ContentView::Interactive(InteractiveView {
                    filters: props.filters(),
                    view_state: props.view_state,
                    map: props.map(),
                    list: props.list_view(),
                    extras,
                })
            } else {
                ContentView::Unsupported(extras)
            }
        }
    }
}

/// Check errors count as "unsupported".
fn map_supported(check: &dyn CapabilityCheck) -> bool {
    match check.supported() {
        Ok(supported) => supported,
        Err(err) => {
            tracing::warn!(error = %err, "capability check failed, showing fallback");
            false
        }
    }
}
