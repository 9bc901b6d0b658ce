//! End-to-end sessions through the host extension points.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use marginal_annotators::Sources;
use marginal_annotators::builtins::format_time;
use marginal_annotators::sources::{BufferInfo, DocKind, FileAttributes, MemorySources, VariableValue};
use marginal_engine::{AnnotationMode, BoundAnnotator, Config, Engine, ExtensionPoints, MetadataValue, Property, Session};
use marginal_primitives::{Candidate, Category, display_width};
use pretty_assertions::assert_eq;

const CASE_FOLD_DOC: &str = "Non-nil if searches and matches should ignore case.";

fn modified_at() -> SystemTime {
	UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

fn sources() -> Sources {
	Sources::from_memory(
		MemorySources::new()
			.value("case-fold-search", VariableValue::True)
			.doc("case-fold-search", DocKind::Variable, CASE_FOLD_DOC)
			.file(
				"init.el",
				FileAttributes {
					modes: "-rw-r--r--".into(),
					uid: 1000,
					gid: 100,
					user: None,
					group: None,
					size: 2048,
					modified: modified_at(),
				},
			)
			.buffer(
				"*scratch*",
				BufferInfo {
					mode: "lisp-interaction-mode".into(),
					..BufferInfo::default()
				},
			),
	)
}

struct Host {
	engine: Arc<Engine>,
	points: Arc<ExtensionPoints>,
}

impl Host {
	fn new(config: &Config) -> Self {
		let engine = Arc::new(Engine::new(config, sources()).expect("config compiles"));
		let points = Arc::new(ExtensionPoints::new());
		AnnotationMode::new(engine.clone(), points.clone()).enable();
		Self { engine, points }
	}

	fn open(&self, command: &str, prompt: &str) -> Session {
		let mut session = Session::new(prompt);
		self.points.start_session(&mut session, Some(command));
		session
	}

	fn category(&self, session: &Session, original: Option<Category>) -> Option<Category> {
		let host = move |_: &Session, property: Property<'_>| match property {
			Property::Category => original.clone().map(MetadataValue::Category),
			_ => None,
		};
		self.points.query(session, Property::Category, &host).and_then(|value| value.as_category().cloned())
	}

	fn annotator(&self, session: &Session, original: Option<Category>) -> Option<BoundAnnotator> {
		let host = move |_: &Session, property: Property<'_>| match property {
			Property::Category => original.clone().map(MetadataValue::Category),
			_ => None,
		};
		self.points.query(session, Property::AnnotationFunction, &host).and_then(MetadataValue::into_annotator)
	}
}

#[test]
fn describe_variable() {
	let host = Host::new(&Config::default());
	let session = host.open("describe-variable", "Describe variable (default car): ");
	assert_eq!(host.category(&session, None), Some(Category::VARIABLE));

	let annotator = host.annotator(&session, None).expect("variable annotator");
	let candidate = "case-fold-search";
	let annotation = annotator.annotate(&Candidate::new(candidate)).expect("annotated");
	assert_eq!(annotation.text(), format!("t  {CASE_FOLD_DOC}"));

	let viewport = 100;
	let rendered = annotation.render(viewport, display_width(candidate));
	let pad = viewport - candidate.len() - "t  ".len() - CASE_FOLD_DOC.len();
	assert_eq!(rendered, format!("{}t  {CASE_FOLD_DOC}", " ".repeat(pad)));
	assert_eq!(display_width(candidate) + display_width(&rendered), viewport);

	assert_eq!(annotator.annotate(&Candidate::new(candidate)), Some(annotation));
}

#[test]
fn alignment_follows_the_viewport() {
	let host = Host::new(&Config::default());
	let session = host.open("describe-variable", "Describe variable: ");
	let annotation = host
		.annotator(&session, None)
		.and_then(|annotator| annotator.annotate(&Candidate::new("case-fold-search")))
		.expect("annotated");
	let wide = annotation.render(120, 16);
	let narrow = annotation.render(90, 16);
	assert_eq!(display_width(&wide) - display_width(&narrow), 30);
	assert!(annotation.render(10, 16).starts_with(" t"));
}

#[test]
fn init_el_under_heavy_table() {
	let host = Host::new(&Config::default());
	let session = host.open("find-file", "Find file: ");
	assert!(host.annotator(&session, Some(Category::FILE)).is_none());

	host.engine.toggle_annotators(None);
	let session = host.open("find-file", "Find file: ");
	assert_eq!(host.category(&session, Some(Category::FILE)), Some(Category::FILE));
	let annotator = host.annotator(&session, Some(Category::FILE)).expect("file annotator");
	let annotation = annotator.annotate(&Candidate::new("init.el")).expect("annotated");
	let expected = format!("-rw-r--r--{sep}{:>12}{sep}{:>7}{sep}{}", "1000:100", "2.0K", format_time(modified_at()), sep = "  ");
	assert_eq!(annotation.text(), expected);
	assert!(annotator.annotate(&Candidate::new("missing.el")).is_none());
	assert!(annotator.annotate(&Candidate::new("/ssh:host:init.el")).is_none());
}

#[test]
fn command_mapping_beats_prompt() {
	let config = Config::from_toml_str(
		r#"
		[command-categories]
		switch-to-buffer = "buffer"
		"#,
	)
	.expect("valid config");
	let host = Host::new(&config);
	let session = host.open("switch-to-buffer", "Switch to variable: ");
	assert_eq!(host.category(&session, None), Some(Category::BUFFER));

	let other = host.open("describe-variable", "Switch to variable: ");
	assert_eq!(host.category(&other, None), Some(Category::VARIABLE));
}

#[test]
fn toggle_rotation() {
	let config = Config::from_toml_str(r#"annotators = ["light", "heavy"]"#).expect("valid config");
	let host = Host::new(&config);
	assert_eq!(host.engine.toggle_annotators(None).names(), ["heavy", "light"]);
	assert_eq!(host.engine.toggle_annotators(None).names(), ["light", "heavy"]);
}

#[test]
fn session_toggle_reverts_with_session() {
	let host = Host::new(&Config::default());
	let session = host.open("switch-to-buffer", "Switch to buffer: ");
	assert!(host.annotator(&session, Some(Category::BUFFER)).is_none());

	host.engine.toggle_annotators(Some(&session));
	let annotator = host.annotator(&session, Some(Category::BUFFER)).expect("buffer annotator");
	assert!(annotator.annotate(&Candidate::new("*scratch*")).is_some());
	drop(session);

	let session = host.open("switch-to-buffer", "Switch to buffer: ");
	assert!(host.annotator(&session, Some(Category::BUFFER)).is_none());
}

#[test]
fn disabled_mode_answers_nothing() {
	let engine = Arc::new(Engine::new(&Config::default(), sources()).expect("config compiles"));
	let points = Arc::new(ExtensionPoints::new());
	let mode = AnnotationMode::new(engine.clone(), points.clone());
	mode.enable();
	mode.disable();
	let host = Host { engine, points };
	let session = host.open("describe-variable", "Describe variable: ");
	assert_eq!(session.command(), None);
	assert!(host.annotator(&session, None).is_none());
	assert_eq!(host.category(&session, Some(Category::FILE)), Some(Category::FILE));
}
