#![cfg_attr(test, allow(unused_crate_dependencies))]
//! `marginal`: reads candidates from stdin and prints them with annotations.

mod cli;
mod render;
#[cfg(test)]
mod tests;

use std::io::{self, BufWriter};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use marginal_annotators::{FileNameBoundaries, InputState, Sources};
use marginal_engine::{AnnotationMode, Config, Engine, ExtensionPoints, MetadataValue, Property, Session};
use marginal_primitives::Category;
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(cli.log_level()).init();

	let config = match &cli.config {
		Some(path) => Config::load(path).with_context(|| format!("failed to load {}", path.display()))?,
		None => Config::default(),
	};
	let engine = Arc::new(Engine::new(&config, Sources::default()).context("invalid configuration")?);
	let points = Arc::new(ExtensionPoints::new());
	AnnotationMode::new(engine.clone(), points.clone()).enable();

	for _ in 0..cli.toggle {
		engine.toggle_annotators(None);
	}

	let mut session = Session::new(cli.prompt.as_str());
	if let Some(input) = &cli.input {
		session.set_input(InputState::new(input.as_str()).with_boundaries(Arc::new(FileNameBoundaries)));
	}
	points.start_session(&mut session, cli.command.as_deref());

	let original = cli.category.as_deref().map(Category::new);
	let host = |_: &Session, property: Property<'_>| match property {
		Property::Category => original.clone().map(MetadataValue::Category),
		_ => None,
	};
	let annotator = points.query(&session, Property::AnnotationFunction, &host).and_then(MetadataValue::into_annotator);
	debug!(
		category = ?session.resolved_category(),
		annotator = annotator.as_ref().map(|a| a.name()),
		"annotating candidates"
	);

	let stdout = io::stdout();
	render::annotate_lines(io::stdin().lock(), BufWriter::new(stdout.lock()), annotator.as_ref(), cli.viewport_width())?;
	Ok(())
}
