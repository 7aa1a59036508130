//! Integration tests for the selected-content projection.
//!
//! Each test drives a [`TabView`] through a sequence of selection and
//! container-lifecycle events and checks that the projection - the pair
//! `(selected_content, selected_content_template)` - matches the container
//! at the selected index after every step.

use std::sync::Arc;

use parking_lot::Mutex;
use trellis_view::{
    template_eq, Content, ContentPresenter, FuncTemplate, SelectionMode, SharedContainer,
    SharedTemplate, TabItemContainer, TabSource, TabView,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The projection a correctly synchronized view must hold: the pair of the
/// container at the selected index, or nulls when unresolvable.
fn expected(view: &TabView) -> (Content, Option<SharedTemplate>) {
    let index = view.selected_index();
    if index < 0 {
        return (Content::None, None);
    }
    let container = view
        .item(index as usize)
        .and_then(|source| source.own_container().cloned())
        .or_else(|| view.container_at(index as usize));
    match container {
        Some(c) => (c.content(), c.template()),
        None => (Content::None, None),
    }
}

fn assert_projection_consistent(view: &TabView) {
    let (content, template) = expected(view);
    assert_eq!(view.selected_content().get(), content);
    assert!(template_eq(
        view.selected_content_template().get().as_ref(),
        template.as_ref()
    ));
}

#[test]
fn projection_tracks_every_event() {
    init_tracing();
    let mut view = TabView::new();

    view.add_tab("a");
    assert_projection_consistent(&view);

    view.add_tab("b");
    view.add_tab("c");
    assert_projection_consistent(&view);

    view.set_selected_index(2);
    assert_projection_consistent(&view);

    view.insert_tab(1, "x").unwrap();
    assert_projection_consistent(&view);

    view.remove_tab(0).unwrap();
    assert_projection_consistent(&view);

    view.clear_container(view.selected_index() as usize);
    assert_projection_consistent(&view);

    view.clear_tabs();
    assert_projection_consistent(&view);
}

#[test]
fn unselect_yields_empty_projection() {
    init_tracing();
    let mut view = TabView::new().with_selection_mode(SelectionMode::Optional);
    view.add_tab("a");
    view.set_selected_index(0);
    assert_eq!(view.selected_content().get(), Content::from("a"));

    view.set_selected_index(-1);
    assert!(view.selected_content().get().is_none());
    assert!(view.selected_content_template().get().is_none());
    assert_projection_consistent(&view);
}

#[test]
fn clear_then_reprepare_restores_projection() {
    init_tracing();
    let mut view = TabView::new().with_selection_mode(SelectionMode::Optional);
    view.add_tab("a");
    view.add_tab("b");
    view.add_tab("c");
    view.set_selected_index(1);
    assert_eq!(view.selected_content().get(), Content::from("b"));

    // Virtualization reclaims the selected container
    view.clear_container(1);
    assert!(view.selected_content().get().is_none());
    assert!(view.selected_content_template().get().is_none());

    // Re-realizing the slot brings the projection back
    view.prepare_container(1).unwrap();
    assert_eq!(view.selected_content().get(), Content::from("b"));
    assert_projection_consistent(&view);
}

#[test]
fn projection_follows_the_slot_not_the_container() {
    init_tracing();
    let mut view = TabView::new().with_selection_mode(SelectionMode::Optional);
    view.add_tab("a");
    view.add_tab("b");
    view.add_tab("c");
    view.set_selected_index(1);

    // Moving the selected container away leaves index 1 vacant; the
    // projection recomputes from the (now absent) occupant of index 1
    view.move_container(1, 2);
    assert!(view.selected_content().get().is_none());
    assert_projection_consistent(&view);

    // Moving a container into the selected slot re-fills the projection
    view.move_container(0, 1);
    assert_eq!(view.selected_content().get(), Content::from("a"));
    assert_projection_consistent(&view);
}

#[test]
fn repeated_selection_is_observationally_idempotent() {
    init_tracing();
    let mut view = TabView::new();
    view.add_tab("a");
    view.add_tab("b");
    view.set_selected_index(1);

    let content_changes = Arc::new(Mutex::new(0));
    let template_changes = Arc::new(Mutex::new(0));

    let c = content_changes.clone();
    view.subscribe_selected_content(move |_| *c.lock() += 1);
    let t = template_changes.clone();
    view.subscribe_selected_content_template(move |_| *t.lock() += 1);

    view.set_selected_index(1);
    view.set_selected_index(1);

    assert_eq!(*content_changes.lock(), 0);
    assert_eq!(*template_changes.lock(), 0);
    assert_projection_consistent(&view);
}

#[test]
fn self_hosting_container_survives_reclamation() {
    init_tracing();
    let own: SharedContainer = Arc::new(TabItemContainer::with_content("hosted"));
    let mut view = TabView::new();
    view.add_tab("data");
    view.add_tab(TabSource::OwnContainer(own.clone()));
    view.set_selected_index(1);

    // The self-hosting container resolves through the item itself even
    // after its registry slot is reclaimed
    view.clear_container(1);
    assert_eq!(view.selected_content().get(), Content::from("hosted"));
    assert_projection_consistent(&view);
}

#[test]
fn templates_flow_from_ambient_default_to_projection() {
    init_tracing();
    let ambient = FuncTemplate::shared(|c| c.clone());
    let local = FuncTemplate::shared(|_| Content::from("local"));

    let hosted = Arc::new(TabItemContainer::with_content("self").with_template(local.clone()));
    let mut view = TabView::new().with_content_template(ambient.clone());
    view.add_tab("data");
    view.add_tab(TabSource::OwnContainer(hosted));

    // Generated container picks up the ambient default
    view.set_selected_index(0);
    assert!(template_eq(
        view.selected_content_template().get().as_ref(),
        Some(&ambient)
    ));

    // Preparation assigns the ambient template to self-hosting containers
    // too, replacing their local one
    view.set_selected_index(1);
    assert!(template_eq(
        view.selected_content_template().get().as_ref(),
        Some(&ambient)
    ));
    assert!(!template_eq(
        view.selected_content_template().get().as_ref(),
        Some(&local)
    ));
    assert_projection_consistent(&view);
}

#[test]
fn presenter_realizes_the_projection() {
    init_tracing();
    let upper = FuncTemplate::shared(|c| match c.as_str() {
        Some(s) => Content::from(s.to_uppercase()),
        None => Content::None,
    });
    let mut view = TabView::new().with_content_template(upper);
    view.add_tab("general");
    view.add_tab("advanced");

    let presenter = ContentPresenter::new();
    assert_eq!(presenter.sync_from(&view).as_str(), Some("GENERAL"));

    view.set_selected_index(1);
    assert_eq!(presenter.sync_from(&view).as_str(), Some("ADVANCED"));
}

#[test]
fn lifecycle_signals_fire_in_order() {
    init_tracing();
    let mut view = TabView::new();
    let events = Arc::new(Mutex::new(Vec::new()));

    let e = events.clone();
    view.registry().container_prepared.connect(move |&index| {
        e.lock().push(format!("prepared {index}"));
    });
    let e = events.clone();
    view.registry()
        .container_index_changed
        .connect(move |&(old, new)| {
            e.lock().push(format!("moved {old}->{new}"));
        });
    let e = events.clone();
    view.registry().container_cleared.connect(move |_| {
        e.lock().push("cleared".to_string());
    });

    view.add_tab("a");
    view.add_tab("b");
    view.remove_tab(0).unwrap();

    assert_eq!(
        *events.lock(),
        vec![
            "prepared 0".to_string(),
            "prepared 1".to_string(),
            "cleared".to_string(),
            "moved 1->0".to_string(),
        ]
    );
}

#[test]
fn selection_survives_interleaved_mutation() {
    init_tracing();
    let mut view = TabView::new();
    for label in ["a", "b", "c", "d"] {
        view.add_tab(label);
    }
    view.set_selected_index(2);

    let observed = Arc::new(Mutex::new(Vec::new()));
    let o = observed.clone();
    view.subscribe_selected_content(move |content| {
        o.lock().push(content.clone());
    });

    view.remove_tab(0).unwrap(); // selection follows "c" to index 1
    assert_eq!(view.selected_index(), 1);
    assert_eq!(view.selected_content().get(), Content::from("c"));

    view.insert_tab(0, "x").unwrap(); // selection follows "c" to index 2
    assert_eq!(view.selected_index(), 2);
    assert_eq!(view.selected_content().get(), Content::from("c"));

    // Intermediate notifications during the shuffle are allowed
    // (last-write-wins); the last one must match the settled value
    assert_eq!(observed.lock().last(), Some(&Content::from("c")));
    assert_projection_consistent(&view);
}
