//! End-to-end lifecycle of the layout shell against the in-memory seams.

use std::cell::RefCell;
use std::rc::Rc;

use aidmap_core::mock::{FakeViewport, RecordingList, StaticSupport};
use aidmap_core::model::{Category, Network, SiteLanguage};
use aidmap_core::{
    Action, CapabilityError, ContentView, Dispatch, Effect, HeaderView, LayoutView, Route, Shell,
    Store,
};

fn network(id: &str, us_state: &str) -> Network {
    Network {
        id: id.to_string(),
        name: format!("{id} mutual aid"),
        category: Category::MutualAid,
        city: None,
        us_state: Some(us_state.to_string()),
        lat: 40.0,
        lng: -74.0,
        website: None,
        languages: Vec::new(),
    }
}

fn shell_with(
    width: f64,
    check: Result<bool, CapabilityError>,
) -> (Shell<Store, FakeViewport, StaticSupport>, Store, FakeViewport) {
    let store = Store::default();
    let viewport = FakeViewport::new(width);
    let shell = Shell::new(store.clone(), viewport.clone(), StaticSupport(check));
    (shell, store, viewport)
}

#[test]
fn test_mount_fetches_in_order_and_waits_for_networks() {
    let (mut shell, store, _viewport) = shell_with(1280.0, Ok(true));
    let effects = Rc::new(RefCell::new(Vec::new()));
    let sink = effects.clone();
    store.set_effect_handler(move |effect| sink.borrow_mut().push(effect));

    shell.initialize().unwrap();

    assert_eq!(
        *effects.borrow(),
        vec![Effect::FetchNetworks, Effect::FetchFoodResources]
    );
    assert_eq!(shell.render(Route::Home), LayoutView::Empty);

    // Food resources alone do not unblock rendering.
    store.dispatch(Action::ReceiveFoodResources(Vec::new()));
    assert_eq!(shell.render(Route::Home), LayoutView::Empty);

    store.dispatch(Action::ReceiveNetworks(vec![network("a", "NY")]));
    assert!(matches!(
        shell.render(Route::Home),
        LayoutView::Page {
            content: ContentView::Interactive(_),
            ..
        }
    ));
}

#[test]
fn test_resize_drives_header_variant() {
    let (mut shell, store, viewport) = shell_with(1280.0, Ok(true));
    store.dispatch(Action::ReceiveNetworks(vec![network("a", "NY")]));
    shell.initialize().unwrap();

    let header = |shell: &Shell<Store, FakeViewport, StaticSupport>| match shell.render(Route::About)
    {
        LayoutView::Page { header, .. } => header,
        LayoutView::Empty => panic!("expected a page"),
    };

    assert!(matches!(header(&shell), HeaderView::Horizontal(_)));

    viewport.resize(768.0);
    assert_eq!(header(&shell), HeaderView::CollapsedIcon);

    shell.toggle_menu();
    assert!(matches!(header(&shell), HeaderView::Sidebar(_)));

    viewport.resize(769.0);
    assert!(matches!(header(&shell), HeaderView::Horizontal(_)));

    viewport.resize(500.0);
    shell.handle_nav();
    assert_eq!(header(&shell), HeaderView::CollapsedIcon);
}

#[test]
fn test_dispose_deregisters_resize_listener() {
    let (mut shell, store, viewport) = shell_with(1024.0, Ok(true));
    shell.initialize().unwrap();
    assert_eq!(viewport.listener_count(), 1);
    assert_eq!(store.listener_count(), 1);

    shell.dispose();

    assert_eq!(viewport.listener_count(), 0);
    assert_eq!(store.listener_count(), 0);
    assert!(!shell.is_listening());

    // Late resizes no longer reach the disposed shell.
    viewport.resize(300.0);
    assert!(!shell.nav().is_mobile);
}

#[test]
fn test_list_scrolls_after_render_on_card_changes_only() {
    let (mut shell, store, _viewport) = shell_with(1024.0, Ok(true));
    store.dispatch(Action::ReceiveNetworks(vec![
        network("a", "NY"),
        network("b", "NY"),
        network("c", "CA"),
    ]));
    let list = RecordingList::default();
    shell.attach_list(list.clone());
    shell.initialize().unwrap();

    store.dispatch(Action::SetHoveredPoint(Some("a".to_string())));
    store.dispatch(Action::SetSiteLanguage(SiteLanguage::Es));
    assert!(!shell.after_render());
    assert_eq!(list.scrolls(), 0);

    store.dispatch(Action::SetUsState("NY".to_string()));
    // Nothing moves until the new cards are on screen.
    assert_eq!(list.scrolls(), 0);
    assert!(shell.after_render());
    assert_eq!(list.scrolls(), 1);

    // Same cards, rebuilt from a fresh record set.
    store.dispatch(Action::ReceiveNetworks(vec![
        network("a", "NY"),
        network("b", "NY"),
        network("c", "CA"),
    ]));
    assert!(!shell.after_render());
    assert_eq!(list.scrolls(), 1);
}

#[test]
fn test_first_records_scroll_once_the_list_is_mounted() {
    let (mut shell, store, _viewport) = shell_with(1024.0, Ok(true));
    shell.initialize().unwrap();

    // Records arrive before any list exists.
    store.dispatch(Action::ReceiveNetworks(vec![network("a", "NY")]));
    let list = RecordingList::default();
    shell.attach_list(list.clone());

    assert!(shell.after_render());
    assert_eq!(list.scrolls(), 1);
}

#[test]
fn test_check_failure_falls_back_to_notice() {
    let (mut shell, store, _viewport) = shell_with(1024.0, Err(CapabilityError::Unavailable));
    store.dispatch(Action::ReceiveNetworks(vec![network("a", "NY")]));
    shell.initialize().unwrap();

    assert!(matches!(
        shell.render(Route::Home),
        LayoutView::Page {
            content: ContentView::Unsupported(_),
            ..
        }
    ));
    assert!(matches!(
        shell.render(Route::TableView),
        LayoutView::Page {
            content: ContentView::NetworksTable(_),
            ..
        }
    ));
}
