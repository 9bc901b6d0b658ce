use std::sync::Arc;

use tracing::debug;

use crate::engine::Engine;
use crate::hooks::ExtensionPoints;
use crate::intercept::{AnnotationLayer, CommandCapture};

/// Process-wide switch wiring the engine into the host's extension points.
///
/// Enabling installs the metadata layer and the command capture hook;
/// disabling removes both. Either is a no-op when already in that state, and
/// neither touches sessions or configuration.
pub struct AnnotationMode {
	engine: Arc<Engine>,
	points: Arc<ExtensionPoints>,
}

impl AnnotationMode {
	pub fn new(engine: Arc<Engine>, points: Arc<ExtensionPoints>) -> Self {
		Self { engine, points }
	}

	pub fn engine(&self) -> &Arc<Engine> {
		&self.engine
	}

	pub fn is_enabled(&self) -> bool {
		self.points.has_layer(AnnotationLayer::NAME)
	}

	/// Returns `true` if the mode was off.
	pub fn enable(&self) -> bool {
		let installed = self.points.install_layer(Arc::new(AnnotationLayer::new(self.engine.clone())));
		let hooked = self.points.install_start_hook(Arc::new(CommandCapture));
		let changed = installed || hooked;
		if changed {
			debug!("annotation mode enabled");
		}
		changed
	}

	/// Returns `true` if the mode was on.
	pub fn disable(&self) -> bool {
		let removed = self.points.remove_layer(AnnotationLayer::NAME);
		let unhooked = self.points.remove_start_hook(CommandCapture::NAME);
		let changed = removed || unhooked;
		if changed {
			debug!("annotation mode disabled");
		}
		changed
	}

	/// Flips the mode; returns whether it is now enabled.
	pub fn toggle(&self) -> bool {
		if self.is_enabled() {
			self.disable();
			false
		} else {
			self.enable();
			true
		}
	}
}
