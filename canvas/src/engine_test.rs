#![allow(clippy::float_cmp)]

use grouping::input::Field;

use super::*;
use crate::panel::IDLE_MESSAGE;

fn core_at(width: f64, height: f64) -> EngineCore {
    let mut core = EngineCore::new();
    core.set_viewport(width, height, 1.0).unwrap();
    core
}

fn first_token(core: &EngineCore, group: usize) -> (f64, f64) {
    let scene = core.scene().unwrap();
    let p = scene.visualization.layout.groups[group].tokens[0];
    (p.x, p.y)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_core_is_idle() {
    let core = EngineCore::new();
    assert!(core.scene().is_none());
    assert_eq!(core.panel().message.text, IDLE_MESSAGE);
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn layout_params_follow_viewport_width() {
    let core = core_at(640.0, 480.0);
    let params = core.layout_params();
    assert_eq!(params.canvas_width, 640.0);
    assert!(!params.placeholders);
}

// =============================================================
// visualize
// =============================================================

#[test]
fn visualize_lays_out_and_updates_panel() {
    let mut core = core_at(800.0, 600.0);
    let scene = core.visualize("12", "3").unwrap();
    assert_eq!(scene.inputs, Inputs { number: 12, group_size: 3 });
    assert_eq!(scene.visualization.layout.group_sizes(), vec![3, 3, 3, 3]);

    assert_eq!(first_token(&core, 0), (40.0, 40.0));
    assert_eq!(first_token(&core, 1), (165.0, 40.0));
    assert_eq!(first_token(&core, 2), (290.0, 40.0));
    assert_eq!(first_token(&core, 3), (40.0, 85.0));

    let panel = core.panel();
    assert_eq!(panel.message.text, "Exact division! 12 is divisible by 3.");
    assert_eq!(panel.primality.text, "12 is a COMPOSITE number");
}

#[test]
fn visualize_trims_entry_text() {
    let mut core = core_at(800.0, 600.0);
    let scene = core.visualize(" 7 ", "\t2").unwrap();
    assert_eq!(scene.inputs, Inputs { number: 7, group_size: 2 });
}

#[test]
fn canvas_view_draws_no_placeholders() {
    let mut core = core_at(800.0, 600.0);
    let scene = core.visualize("7", "3").unwrap();
    let last = scene.visualization.layout.groups.last().unwrap();
    assert!(!last.complete);
    assert!(last.placeholders.is_empty());
}

#[test]
fn group_size_is_not_capped() {
    let mut core = core_at(800.0, 600.0);
    let scene = core.visualize("12", "500").unwrap();
    assert_eq!(scene.visualization.layout.group_sizes(), vec![12]);
    assert!(!scene.visualization.summary.divisible);
}

#[test]
fn one_is_reported_as_composite() {
    let mut core = core_at(800.0, 600.0);
    core.visualize("1", "1").unwrap();
    assert_eq!(core.panel().primality.text, "1 is a COMPOSITE number");
}

// =============================================================
// Errors keep the previous scene
// =============================================================

#[test]
fn non_integer_is_rejected_and_scene_kept() {
    let mut core = core_at(800.0, 600.0);
    core.visualize("12", "3").unwrap();
    let before = core.clone();

    let err = core.visualize("twelve", "3").unwrap_err();
    assert!(matches!(err, ShellError::Input(InputError::NotAnInteger { field: Field::Number, .. })));
    assert_eq!(core, before);
}

#[test]
fn out_of_range_number_is_rejected() {
    let mut core = core_at(800.0, 600.0);
    let err = core.visualize("101", "3").unwrap_err();
    assert_eq!(err, ShellError::Input(InputError::OutOfRange { value: "101".into() }));
    assert_eq!(err.to_string(), "Please enter a number between 1 and 100 (got 101).");
    assert!(core.scene().is_none());
    assert_eq!(core.panel().message.text, IDLE_MESSAGE);
}

#[test]
fn zero_group_is_rejected() {
    let mut core = core_at(800.0, 600.0);
    let err = core.visualize("12", "0").unwrap_err();
    assert_eq!(err, ShellError::Input(InputError::NonPositiveGroup { value: "0".into() }));
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn widening_the_viewport_rewraps_the_scene() {
    let mut core = core_at(800.0, 600.0);
    core.visualize("12", "3").unwrap();
    assert_eq!(first_token(&core, 3), (40.0, 85.0));

    core.set_viewport(1400.0, 600.0, 2.0).unwrap();
    assert_eq!(first_token(&core, 3), (415.0, 40.0));
    assert_eq!(core.dpr, 2.0);
}

#[test]
fn content_height_grows_with_the_scene() {
    let mut core = core_at(800.0, 300.0);
    assert_eq!(core.content_height(), 300.0);

    core.visualize("100", "10").unwrap();
    assert_eq!(core.content_height(), 510.0);

    core.set_viewport(800.0, 700.0, 1.0).unwrap();
    assert_eq!(core.content_height(), 700.0);
}

#[test]
fn failed_relayout_is_reported_and_scene_kept() {
    let mut core = core_at(800.0, 600.0);
    core.visualize("12", "3").unwrap();
    let before = core.scene().cloned();

    let err = core.set_viewport(0.0, 600.0, 1.0).unwrap_err();
    assert!(matches!(err, ShellError::Core(GroupingError::InvalidArgument(_))));
    assert_eq!(core.scene().cloned(), before);
    assert_eq!(first_token(&core, 3), (40.0, 85.0));
    assert_eq!(core.viewport_width, 0.0);

    // A later valid width lays the kept scene out again.
    core.set_viewport(1400.0, 600.0, 1.0).unwrap();
    assert_eq!(first_token(&core, 3), (415.0, 40.0));
}

#[test]
fn empty_core_accepts_any_viewport() {
    let mut core = EngineCore::new();
    assert_eq!(core.set_viewport(0.0, 0.0, 1.0), Ok(()));
}
