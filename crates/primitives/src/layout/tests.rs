use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[test]
fn right_align_sums_every_column() {
	let spec = compute_right_align(&[10, 2, 12, 2, 7]);
	assert_eq!(spec.from_right(), 33);
	assert_eq!(spec.with_margin(3).from_right(), 36);
}

#[test]
fn filler_tracks_viewport_width() {
	let spec = compute_right_align(&[20]);
	assert_eq!(spec.filler(80, 10), 50);
	assert_eq!(spec.filler(100, 10), 70);
}

#[test]
fn filler_never_collapses_to_zero() {
	let spec = compute_right_align(&[60]);
	assert_eq!(spec.filler(40, 30), 1);
}

#[test]
fn truncate_keeps_short_text() {
	assert_eq!(truncate("hello", 5), "hello");
	assert_eq!(truncate("hello", 80), "hello");
}

#[test]
fn truncate_appends_ellipsis() {
	assert_eq!(truncate("hello world", 6), "hello…");
	assert_eq!(display_width(&truncate("hello world", 6)), 6);
}

#[test]
fn truncate_uses_first_line_only() {
	assert_eq!(truncate("Summary line.\nDetails follow.", 80), "Summary line.");
}

#[test]
fn truncate_counts_wide_characters() {
	let out = truncate("日本語テキスト", 5);
	assert_eq!(out, "日本…");
	assert!(display_width(&out) <= 5);
}

#[test]
fn truncate_escapes_control_characters() {
	assert_eq!(truncate("a\u{1}b", 10), "a^Ab");
	assert_eq!(display_width("a\u{1}b"), 4);
	assert_eq!(truncate("tab\there", 80), "tab^Ihere");
}

#[test]
fn truncate_strips_c1_controls() {
	assert_eq!(truncate("a\u{85}b", 10), "ab");
}

#[test]
fn truncate_to_zero_width_is_empty() {
	assert_eq!(truncate("hello", 0), "");
}

#[test]
fn truncate_with_wide_ellipsis_drops_marker() {
	assert_eq!(truncate_with("hello", 2, "..."), "he");
	assert_eq!(truncate_with("hello world", 8, "..."), "hello...");
}

#[test]
fn truncate_start_keeps_tail() {
	assert_eq!(truncate_start("~/src/project/main.rs", 10), "…t/main.rs");
	assert_eq!(truncate_start("main.rs", 10), "main.rs");
}

#[rstest]
#[case(0, "0")]
#[case(512, "512")]
#[case(1023, "1023")]
#[case(1024, "1.0K")]
#[case(1536, "1.5K")]
#[case(2048, "2.0K")]
#[case(10 * 1024, "10K")]
#[case(5 * 1024 * 1024, "5.0M")]
#[case(300 * 1024 * 1024 * 1024, "300G")]
#[case(10_239, "10K")]
#[case(1_048_575, "1.0M")]
#[case(10 * 1024 * 1024 - 1, "10M")]
fn human_size_formats_binary_units(#[case] bytes: u64, #[case] expected: &str) {
	assert_eq!(human_size(bytes), expected);
}

proptest! {
	#[test]
	fn truncate_never_exceeds_width(text in "\\PC{0,64}", width in 0usize..40) {
		prop_assert!(display_width(&truncate(&text, width)) <= width);
		prop_assert!(display_width(&truncate_start(&text, width)) <= width);
	}

	#[test]
	fn truncate_is_identity_when_text_fits(text in "[a-zA-Z0-9 ._-]{0,32}", slack in 0usize..8) {
		let width = display_width(&text) + slack;
		prop_assert_eq!(truncate(&text, width), text);
	}
}
