use std::sync::Arc;

use clap::Parser;
use marginal_annotators::Sources;
use marginal_annotators::sources::{DocKind, MemorySources};
use marginal_engine::{AnnotationMode, Config, Engine, ExtensionPoints, MetadataValue, NoHostMetadata, Property, Session};
use pretty_assertions::assert_eq;

use crate::cli::Cli;
use crate::render::annotate_lines;

#[test]
fn parses_flags() {
	let cli = Cli::parse_from(["marginal", "--category", "file", "--command", "find-file", "-w", "100", "-t", "2", "-vv"]);
	assert_eq!(cli.category.as_deref(), Some("file"));
	assert_eq!(cli.command.as_deref(), Some("find-file"));
	assert_eq!(cli.viewport_width(), 100);
	assert_eq!(cli.toggle, 2);
	assert_eq!(cli.log_level(), tracing::Level::TRACE);
}

#[test]
fn quiet_by_default() {
	let cli = Cli::parse_from(["marginal"]);
	assert_eq!(cli.log_level(), tracing::Level::WARN);
	assert_eq!(cli.prompt, "");
	assert_eq!(cli.toggle, 0);
}

#[test]
fn annotates_each_line() {
	let sources = Sources::from_memory(MemorySources::new().binding("save-buffer", "C-x C-s").doc(
		"save-buffer",
		DocKind::Function,
		"Save current buffer.",
	));
	let engine = Arc::new(Engine::new(&Config::default(), sources).unwrap());
	let points = Arc::new(ExtensionPoints::new());
	AnnotationMode::new(engine, points.clone()).enable();
	let mut session = Session::new("M-x ");
	points.start_session(&mut session, Some("execute-extended-command"));
	let annotator = points.query(&session, Property::AnnotationFunction, &NoHostMetadata).and_then(MetadataValue::into_annotator);
	assert!(annotator.is_some());

	let mut out = Vec::new();
	annotate_lines("save-buffer\nundefined-command\n".as_bytes(), &mut out, annotator.as_ref(), 30).unwrap();
	let out = String::from_utf8(out).unwrap();
	let lines: Vec<_> = out.lines().collect();
	assert_eq!(lines, ["save-buffer (C-x C-s)", "undefined-command"]);
}

#[test]
fn without_annotator_lines_pass_through() {
	let mut out = Vec::new();
	annotate_lines("a\nb\n".as_bytes(), &mut out, None, 80).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n");
}

#[test]
fn invalid_utf8_line_does_not_stop_listing() {
	let mut out = Vec::new();
	annotate_lines(&b"first\n\xffbad\r\nlast"[..], &mut out, None, 80).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "first\n\u{fffd}bad\nlast\n");
}
