use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use std::time::UNIX_EPOCH;

use marginal_annotators::sources::{DocKind, FileAttributes, MemorySources, VariableValue};
use marginal_annotators::{FileNameBoundaries, InputState, Sources};
use marginal_primitives::{Candidate, Category};
use marginal_registry::{ClassifierChain, ClassifierSet, Classify, ClassifyContext, Entry, OriginalClassifier};

use super::*;

fn sources() -> Sources {
	Sources::from_memory(
		MemorySources::new()
			.value("fill-column", VariableValue::Number("70".into()))
			.doc("fill-column", DocKind::Variable, "Column beyond which automatic line-wrapping should happen.")
			.binding("save-buffer", "C-x C-s")
			.doc("save-buffer", DocKind::Function, "Save current buffer in visited file if modified."),
	)
}

fn setup() -> (Arc<Engine>, Arc<ExtensionPoints>, AnnotationMode) {
	let engine = Arc::new(Engine::new(&Config::default(), sources()).unwrap());
	let points = Arc::new(ExtensionPoints::new());
	let mode = AnnotationMode::new(engine.clone(), points.clone());
	(engine, points, mode)
}

fn host(category: Option<Category>) -> impl Fn(&Session, Property<'_>) -> Option<MetadataValue> {
	move |_: &Session, property: Property<'_>| match property {
		Property::Category => category.clone().map(MetadataValue::Category),
		Property::Other("display-sort-function") => Some(MetadataValue::Other("host-sort".into())),
		_ => None,
	}
}

fn started(points: &ExtensionPoints, prompt: &str, command: &str) -> Session {
	let mut session = Session::new(prompt);
	points.start_session(&mut session, Some(command));
	session
}

struct Counting {
	calls: Arc<AtomicUsize>,
	answer: Option<Category>,
}

impl Classify for Counting {
	fn name(&self) -> &str {
		"counting"
	}

	fn classify(&self, _cx: &ClassifyContext<'_>) -> Option<Category> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.answer.clone()
	}
}

#[test]
fn disabled_mode_leaves_host_alone() {
	let (_, points, mode) = setup();
	assert!(!mode.is_enabled());
	let session = started(&points, "Describe variable: ", "describe-variable");
	assert_eq!(session.command(), None);
	let value = points.query(&session, Property::Category, &host(Some(Category::FILE)));
	assert_eq!(value.as_ref().and_then(MetadataValue::as_category), Some(&Category::FILE));
	assert!(points.query(&session, Property::AnnotationFunction, &host(None)).is_none());
}

#[test]
fn enable_and_disable_are_idempotent() {
	let (_, points, mode) = setup();
	assert!(mode.enable());
	assert!(!mode.enable());
	assert!(points.has_layer(AnnotationLayer::NAME));
	assert!(points.has_start_hook(CommandCapture::NAME));
	assert!(mode.disable());
	assert!(!mode.disable());
	assert!(!points.has_layer(AnnotationLayer::NAME));
	assert!(!points.has_start_hook(CommandCapture::NAME));
	assert!(mode.toggle());
	assert!(mode.is_enabled());
}

#[test]
fn session_start_captures_command() {
	let (_, points, mode) = setup();
	mode.enable();
	let session = started(&points, "M-x ", "execute-extended-command");
	assert_eq!(session.command(), Some("execute-extended-command"));
}

#[test]
fn category_query_is_classified() {
	let (_, points, mode) = setup();
	mode.enable();
	let session = started(&points, "Describe variable (default car): ", "describe-variable");
	let value = points.query(&session, Property::Category, &host(None));
	assert_eq!(value.as_ref().and_then(MetadataValue::as_category), Some(&Category::VARIABLE));
	assert_eq!(session.resolved_category(), Some(&Category::VARIABLE));
}

#[test]
fn original_category_stays_visible() {
	let (_, points, mode) = setup();
	mode.enable();
	let session = started(&points, "Find file: ", "recentf-open");
	let value = points.query(&session, Property::Category, &host(Some(Category::new("unicode-name"))));
	assert_eq!(value.as_ref().and_then(MetadataValue::as_category), Some(&Category::FILE));
	assert_eq!(session.original_category(), Some(&Category::new("unicode-name")));
	assert_eq!(session.resolved_category(), Some(&Category::FILE));
}

#[test]
fn other_properties_fall_through() {
	let (_, points, mode) = setup();
	mode.enable();
	let session = started(&points, "M-x ", "execute-extended-command");
	let value = points.query(&session, Property::from_name("display-sort-function"), &host(None));
	assert!(matches!(value, Some(MetadataValue::Other(ref s)) if s == "host-sort"));
	assert!(points.query(&session, Property::from_name("cycle-sort-function"), &host(None)).is_none());
}

#[test]
fn annotation_function_binds_annotator() {
	let (_, points, mode) = setup();
	mode.enable();
	let session = started(&points, "Describe variable: ", "describe-variable");
	let annotator = points
		.query(&session, Property::AnnotationFunction, &host(None))
		.and_then(MetadataValue::into_annotator)
		.unwrap();
	assert_eq!(annotator.name(), "variable");
	let annotation = annotator.annotate(&Candidate::new("fill-column")).unwrap();
	assert!(annotation.text().starts_with("70 "));
	assert!(annotator.annotate(&Candidate::new("no-such-variable")).is_none());
}

#[test]
fn unknown_category_falls_back_to_host() {
	let (_, points, mode) = setup();
	mode.enable();
	let session = started(&points, "Insert character: ", "insert-char");
	let host = |_: &Session, property: Property<'_>| match property {
		Property::Category => Some(MetadataValue::Category(Category::new("unicode-name"))),
		Property::AnnotationFunction => Some(MetadataValue::Other("host-annotator".into())),
		_ => None,
	};
	let value = points.query(&session, Property::AnnotationFunction, &host);
	assert!(matches!(value, Some(MetadataValue::Other(ref s)) if s == "host-annotator"));
}

#[test]
fn builtin_entry_defers_to_host() {
	let config = Config::from_toml_str("[tables.light]\ncommand = \"builtin\"\n").unwrap();
	let engine = Arc::new(Engine::new(&config, sources()).unwrap());
	let points = Arc::new(ExtensionPoints::new());
	AnnotationMode::new(engine, points.clone()).enable();
	let session = started(&points, "M-x ", "execute-extended-command");
	assert!(points.query(&session, Property::AnnotationFunction, &NoHostMetadata).is_none());
	assert_eq!(session.resolved_category(), Some(&Category::COMMAND));
}

#[test]
fn classification_is_memoized() {
	let (engine, points, mode) = setup();
	mode.enable();
	let calls = Arc::new(AtomicUsize::new(0));
	engine.replace_classifiers(ClassifierChain::new(vec![Arc::new(Counting {
		calls: calls.clone(),
		answer: Some(Category::COMMAND),
	})]));
	let session = started(&points, "M-x ", "execute-extended-command");
	for _ in 0..3 {
		points.query(&session, Property::Category, &NoHostMetadata);
		points.query(&session, Property::AnnotationFunction, &NoHostMetadata);
	}
	assert_eq!(calls.load(Ordering::SeqCst), 1);

	let next = started(&points, "M-x ", "execute-extended-command");
	points.query(&next, Property::Category, &NoHostMetadata);
	assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn no_match_is_memoized_too() {
	let (engine, _, _) = setup();
	let calls = Arc::new(AtomicUsize::new(0));
	engine.replace_classifiers(ClassifierChain::new(vec![Arc::new(Counting {
		calls: calls.clone(),
		answer: None,
	})]));
	let session = Session::new("Find file: ");
	assert_eq!(engine.category(&session, || None), None);
	assert_eq!(engine.category(&session, || None), None);
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn host_category_is_asked_once() {
	let (engine, _, _) = setup();
	engine.replace_classifiers(ClassifierChain::new(vec![Arc::new(OriginalClassifier)]));
	let asked = AtomicUsize::new(0);
	let session = Session::new("");
	let original = || {
		asked.fetch_add(1, Ordering::SeqCst);
		Some(Category::BUFFER)
	};
	assert_eq!(engine.category(&session, original), Some(Category::BUFFER));
	assert_eq!(engine.category(&session, original), Some(Category::BUFFER));
	assert_eq!(asked.load(Ordering::SeqCst), 1);
}

#[test]
fn global_toggle_rotates_ring() {
	let (engine, _, _) = setup();
	assert_eq!(engine.toggle_annotators(None).names(), ["heavy", "none", "light"]);
	assert_eq!(engine.registry().ring().active().name(), "heavy");
}

#[test]
fn session_toggle_is_scoped() {
	let (engine, points, mode) = setup();
	mode.enable();
	let session = started(&points, "M-x ", "execute-extended-command");
	let entry = engine.entry_for(&session, || None);
	assert_eq!(entry.as_ref().map(Entry::name), Some("binding"));

	engine.toggle_annotators(Some(&session));
	assert_eq!(engine.ring(Some(&session)).active().name(), "heavy");
	assert_eq!(engine.registry().ring().active().name(), "light");
	let entry = engine.entry_for(&session, || None);
	assert_eq!(entry.as_ref().map(Entry::name), Some("command"));

	engine.toggle_annotators(Some(&session));
	let entry = engine.entry_for(&session, || None);
	assert!(entry.is_none());

	let next = started(&points, "M-x ", "execute-extended-command");
	assert_eq!(engine.ring(Some(&next)).active().name(), "light");
}

#[test]
fn reconfigure_swaps_everything() {
	let (engine, _, _) = setup();
	let config = Config::from_toml_str(
		r#"
		annotators = ["none", "light"]
		classifiers = ["prompt"]

		[widths]
		documentation = 10
		"#,
	)
	.unwrap();
	engine.reconfigure(&config).unwrap();
	assert_eq!(engine.registry().ring().names(), ["none", "light"]);
	assert_eq!(engine.classifiers().names(), ["prompt"]);
	assert_eq!(engine.settings().widths.documentation, 10);
}

#[test]
fn failed_reconfigure_keeps_previous() {
	let (engine, _, _) = setup();
	let config = Config::from_toml_str(r#"annotators = ["light", "fancy"]"#).unwrap();
	assert!(engine.reconfigure(&config).is_err());
	assert_eq!(engine.registry().ring().names(), ["light", "heavy", "none"]);
}

#[test]
fn layers_run_front_to_back() {
	struct Fixed(&'static str);

	impl MetadataLayer for Fixed {
		fn name(&self) -> &str {
			self.0
		}

		fn query(&self, session: &Session, property: Property<'_>, next: &dyn HostMetadata) -> Option<MetadataValue> {
			match property {
				Property::Other(name) if name == self.0 => Some(MetadataValue::Other(self.0.to_string())),
				_ => next.metadata(session, property),
			}
		}
	}

	let points = ExtensionPoints::new();
	assert!(points.install_layer(Arc::new(Fixed("a"))));
	assert!(points.install_layer(Arc::new(Fixed("b"))));
	assert!(!points.install_layer(Arc::new(Fixed("a"))));
	let session = Session::new("");
	let query = |name| points.query(&session, Property::from_name(name), &NoHostMetadata);
	assert!(matches!(query("a"), Some(MetadataValue::Other(ref s)) if s == "a"));
	assert!(matches!(query("b"), Some(MetadataValue::Other(ref s)) if s == "b"));
	assert!(query("c").is_none());
	assert!(points.remove_layer("a"));
	assert!(query("a").is_none());
}

fn file(size: u64) -> FileAttributes {
	FileAttributes {
		modes: "-rw-r--r--".into(),
		uid: 1,
		gid: 1,
		user: None,
		group: None,
		size,
		modified: UNIX_EPOCH,
	}
}

fn typed(text: &str) -> InputState {
	InputState::new(text).with_boundaries(Arc::new(FileNameBoundaries))
}

#[test]
fn bound_annotator_follows_typing() {
	let sources = Sources::from_memory(MemorySources::new().file("a/init.el", file(10)).file("b/init.el", file(5000)));
	let config = Config::from_toml_str(r#"annotators = ["heavy"]"#).unwrap();
	let engine = Arc::new(Engine::new(&config, sources).unwrap());
	let points = Arc::new(ExtensionPoints::new());
	AnnotationMode::new(engine, points.clone()).enable();

	let session = started(&points, "Find file: ", "find-file").with_input(typed("a/in"));
	let annotator = points
		.query(&session, Property::AnnotationFunction, &host(Some(Category::FILE)))
		.and_then(MetadataValue::into_annotator)
		.unwrap();
	let size_column = |size: &str| format!("  {size:>7}  ");
	let text = annotator.annotate(&Candidate::new("init.el")).unwrap().text();
	assert!(text.contains(&size_column("10")), "unexpected annotation: {text}");

	session.set_input(typed("b/in"));
	let text = annotator.annotate(&Candidate::new("init.el")).unwrap().text();
	assert!(text.contains(&size_column("4.9K")), "unexpected annotation: {text}");

	session.set_input(typed("c/in"));
	assert!(annotator.annotate(&Candidate::new("init.el")).is_none());
}

#[test]
fn session_classifiers_beat_global_order() {
	let (engine, points, mode) = setup();
	mode.enable();
	let prompt_only = ClassifierSet::builtin().chain(&["prompt"]).unwrap();
	let local = started(&points, "Describe variable: ", "recentf-open").with_classifiers(prompt_only);
	assert_eq!(engine.category(&local, || None), Some(Category::VARIABLE));

	let global = started(&points, "Describe variable: ", "recentf-open");
	assert_eq!(engine.category(&global, || None), Some(Category::FILE));
	assert_eq!(engine.classifiers().names(), ["command", "original", "prompt", "symbol"]);
}
