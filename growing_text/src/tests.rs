// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use peniko::color::palette;

use crate::{
    ErrorKind, FixedMeasurer, FnMeasurer, FontSpec, GrowingTextView, GrowingTextViewConfig,
    HeightBounds, StyleConfig, StyledText, TextBinding, TextSurface,
};

/// Twenty pixels per started line of 10 bytes, like a narrow field with a fixed line height.
fn line_measurer() -> FnMeasurer<impl FnMut(&StyledText, f32) -> f32> {
    FnMeasurer(|text: &StyledText, _width: f32| {
        let lines = text.len().div_ceil(10).max(1);
        lines as f32 * 20.0
    })
}

fn small_config() -> GrowingTextViewConfig {
    GrowingTextViewConfig::new()
        .with_min_height(30.0)
        .with_max_height(150.0)
}

#[test]
fn scenario_clamps_tall_and_short_content() {
    let mut view = GrowingTextView::new(TextBinding::new("x"), small_config());
    assert_eq!(view.after_layout(&mut FixedMeasurer(500.0), 200.0), 150.0);
    view.update();
    assert_eq!(view.after_layout(&mut FixedMeasurer(5.0), 200.0), 30.0);
    assert_eq!(view.height(), Some(30.0));
}

#[test]
fn height_stays_in_bounds_for_degenerate_measurements() {
    let mut view = GrowingTextView::new(TextBinding::new("x"), small_config());
    for measured in [0.0, -40.0, f32::NAN, f32::INFINITY, 1e9] {
        view.update();
        let height = view.after_layout(&mut FixedMeasurer(measured), 200.0);
        assert!((30.0..=150.0).contains(&height), "{measured} gave {height}");
    }
}

#[test]
fn displayed_height_defaults_to_min_until_measured() {
    let view = GrowingTextView::new(TextBinding::default(), GrowingTextViewConfig::new());
    assert_eq!(view.height(), None);
    assert_eq!(view.displayed_height(), 150.0);
    assert_eq!(view.bounds(), HeightBounds::new(150.0, 1000.0));
}

#[test]
fn measurement_is_deferred_to_after_layout() {
    let calls = Rc::new(RefCell::new(Vec::<String>::new()));
    let seen = calls.clone();
    let mut measurer = FnMeasurer(move |text: &StyledText, _width: f32| {
        seen.borrow_mut().push(String::from(text.text()));
        40.0
    });

    let binding = TextBinding::new("");
    let mut view = GrowingTextView::new(binding.clone(), small_config());
    binding.set("first");
    view.update();
    assert!(view.has_pending_measure());
    assert!(calls.borrow().is_empty());

    assert_eq!(view.after_layout(&mut measurer, 100.0), 40.0);
    assert_eq!(*calls.borrow(), ["first"]);
    assert!(!view.has_pending_measure());

    // Nothing pending, nothing measured.
    assert_eq!(view.after_layout(&mut measurer, 100.0), 40.0);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn height_grows_and_shrinks_with_content() {
    let binding = TextBinding::new("");
    let mut view = GrowingTextView::new(binding.clone(), small_config());
    let mut measurer = line_measurer();
    assert_eq!(view.after_layout(&mut measurer, 100.0), 30.0);

    view.focus();
    view.insert_str("0123456789abcdef").unwrap();
    assert_eq!(view.after_layout(&mut measurer, 100.0), 40.0);

    binding.set("0123456789".repeat(12));
    assert!(view.update_if_needed());
    assert_eq!(view.after_layout(&mut measurer, 100.0), 150.0);

    view.delete_range(5..120).unwrap();
    assert_eq!(view.text(), "01234");
    assert_eq!(view.after_layout(&mut measurer, 100.0), 30.0);
    assert_eq!(view.editing_surface().content_height(), Some(20.0));
}

#[test]
fn placeholder_visibility_follows_emptiness() {
    let binding = TextBinding::new("");
    let config = small_config().with_placeholder("Hello World");
    let mut view = GrowingTextView::new(binding.clone(), config);
    assert!(view.is_placeholder_visible());
    assert_eq!(
        view.placeholder_surface().map(TextSurface::text),
        Some("Hello World")
    );

    binding.set("typed");
    view.update();
    assert!(!view.is_placeholder_visible());
    assert!(view.placeholder_surface().is_none());

    binding.set("");
    view.update();
    assert!(view.is_placeholder_visible());
}

#[test]
fn no_placeholder_configured_means_none_shown() {
    let view = GrowingTextView::new(TextBinding::new(""), small_config());
    assert!(!view.is_placeholder_visible());
}

#[test]
fn placeholder_is_styled_and_disabled() {
    let style = StyleConfig::new()
        .with_font(FontSpec::system(15.0))
        .with_line_height(20.0)
        .with_text_color(palette::css::WHITE)
        .with_mention_handle("Nickname");
    let config = small_config()
        .with_style(style)
        .with_placeholder("@Nickname says hi")
        .with_placeholder_color(palette::css::SILVER);
    let view = GrowingTextView::new(TextBinding::new(""), config);
    let placeholder = view.placeholder_surface().unwrap();

    assert!(!placeholder.is_editable());
    let styled = placeholder.styled_text();
    let silver = palette::css::SILVER.to_rgba8();
    for index in 0..styled.len() {
        assert_eq!(styled.foreground_at(index).map(|c| c.to_rgba8()), Some(silver));
    }
    assert_eq!(styled.line_height_at(0), Some(20.0));
}

#[test]
fn tall_placeholder_is_not_cut_off() {
    let config = small_config().with_placeholder("a long hint spanning several lines");
    let mut view = GrowingTextView::new(TextBinding::new(""), config);
    assert_eq!(view.after_layout(&mut line_measurer(), 100.0), 80.0);
}

#[test]
fn edits_write_back_immediately() {
    let binding = TextBinding::new("");
    let mut view = GrowingTextView::new(binding.clone(), small_config());
    view.focus();
    view.insert_str("h").unwrap();
    assert_eq!(binding.get(), "h");
    view.insert_str("i").unwrap();
    assert_eq!(binding.get(), "hi");
    view.replace_range(0..1, "H").unwrap();
    assert_eq!(binding.get(), "Hi");
    assert!(!view.needs_update());
}

#[test]
fn edits_without_focus_are_rejected() {
    let binding = TextBinding::new("keep");
    let mut view = GrowingTextView::new(binding.clone(), small_config());
    let err = view.insert_str("nope").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotEditing);
    assert_eq!(binding.get(), "keep");
}

#[test]
fn external_writes_restyle_the_surface() {
    let style = StyleConfig::new().with_mention_handle("alice");
    let binding = TextBinding::new("");
    let mut view = GrowingTextView::new(binding.clone(), small_config().with_style(style));

    binding.set("@alice lunch?");
    assert!(view.needs_update());
    assert!(view.update_if_needed());
    assert!(!view.update_if_needed());
    assert_eq!(view.editing_surface().text(), "@alice lunch?");
    assert!(view.editing_surface().styled_text().foreground_at(0).is_some());

    binding.set("");
    view.update();
    assert_eq!(view.editing_surface().text(), "");
}

#[test]
fn scenario_mention_is_highlighted_in_the_editor() {
    let style = StyleConfig::new()
        .with_text_color(palette::css::WHITE)
        .with_mention_handle("Nickname")
        .with_mention_color(palette::css::GRAY);
    let mut view = GrowingTextView::new(TextBinding::new(""), small_config().with_style(style));
    view.focus();
    view.insert_str("@Nickname hello").unwrap();

    let styled = view.editing_surface().styled_text();
    let gray = palette::css::GRAY.to_rgba8();
    let white = palette::css::WHITE.to_rgba8();
    for index in 0..styled.len() {
        let expected = if index < 9 { gray } else { white };
        assert_eq!(styled.foreground_at(index).map(|c| c.to_rgba8()), Some(expected));
    }
}

#[test]
fn scenario_later_mention_is_not_highlighted() {
    let style = StyleConfig::new()
        .with_text_color(palette::css::WHITE)
        .with_mention_handle("Nickname");
    let view = GrowingTextView::new(
        TextBinding::new("hello @Nickname"),
        small_config().with_style(style),
    );
    let styled = view.editing_surface().styled_text();
    let white = palette::css::WHITE.to_rgba8();
    for index in 0..styled.len() {
        assert_eq!(styled.foreground_at(index).map(|c| c.to_rgba8()), Some(white));
    }
}

#[test]
fn editing_callbacks_fire_once_per_transition() {
    let began = Rc::new(Cell::new(0_u32));
    let ended = Rc::new(Cell::new(0_u32));
    let (b, e) = (began.clone(), ended.clone());
    let config = small_config()
        .on_begin_editing(move |surface: &TextSurface| {
            assert!(surface.is_editing());
            b.set(b.get() + 1);
        })
        .on_end_editing(move |surface: &TextSurface| {
            assert!(!surface.is_editing());
            e.set(e.get() + 1);
        });
    let binding = TextBinding::new("");
    let mut view = GrowingTextView::new(binding.clone(), config);

    assert!(view.focus());
    assert!(!view.focus());
    view.insert_str("typing").unwrap();
    binding.set("host write");
    view.update();
    assert_eq!((began.get(), ended.get()), (1, 0));

    assert!(view.blur());
    assert!(!view.blur());
    assert_eq!((began.get(), ended.get()), (1, 1));

    view.focus();
    view.blur();
    assert_eq!((began.get(), ended.get()), (2, 2));
}

#[test]
fn tint_color_belongs_to_the_surface() {
    let style = StyleConfig::new().with_tint_color(palette::css::RED);
    let view = GrowingTextView::new(TextBinding::new("hi"), small_config().with_style(style));
    assert_eq!(
        view.editing_surface().tint_color().map(|c| c.to_rgba8()),
        Some(palette::css::RED.to_rgba8())
    );
    assert_eq!(view.editing_surface().styled_text().spans().len(), 0);
}

#[test]
#[should_panic(expected = "cannot be restored from an archive")]
fn archive_construction_is_fatal() {
    let _ = GrowingTextView::from_archive(&[0xde, 0xad]);
}

#[test]
fn edit_after_external_write_applies_to_the_new_text() {
    let binding = TextBinding::new("draft");
    let mut view = GrowingTextView::new(binding.clone(), small_config());
    view.focus();

    binding.set("");
    view.insert_str("x").unwrap();
    assert_eq!(binding.get(), "x");
    assert_eq!(view.editing_surface().text(), "x");

    binding.set("host text");
    view.replace_range(0..4, "HOST").unwrap();
    assert_eq!(binding.get(), "HOST text");

    binding.set("ab");
    view.delete_range(1..2).unwrap();
    assert_eq!(binding.get(), "a");
    assert!(!view.needs_update());
}

#[test]
fn edit_ranges_are_checked_against_the_new_text() {
    let binding = TextBinding::new("a long draft");
    let mut view = GrowingTextView::new(binding.clone(), small_config());
    view.focus();

    binding.set("");
    let err = view.delete_range(0..5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidBounds);
    assert_eq!(binding.get(), "");
    assert_eq!(view.editing_surface().text(), "");
}
