/// Return everything after the first occurrence of `marker` in `source`.
///
/// When the marker is missing the segment is empty. This is not an error: the
/// generated module simply carries an empty documentation block.
pub fn examples_segment<'a>(source: &'a str, marker: &str) -> &'a str {
	source
		.split_once(marker)
		.map_or("", |(_, examples)| examples)
}

/// A rendered module ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
	/// The complete text of the module.
	pub content: String,
	/// The examples segment embedded in the documentation block.
	pub examples: String,
}

impl GeneratedModule {
	/// Whether the readme yielded any examples.
	pub fn has_examples(&self) -> bool {
		!self.examples.is_empty()
	}
}

/// Wrap `examples` in the generated module template.
///
/// The header, warning comment and placeholder declaration never depend on
/// the examples, so the output is always a complete compilation unit for the
/// doc-test tool.
pub fn render_module(module_name: &str, examples: &str) -> GeneratedModule {
	let content = format!(
		"\nmodule {module_name} exposing (..)\n\n{{-| AUTO GENERATED -- DO NOT EDIT -}}\n\n{{-|\n{examples}\n-}}\ntest : Maybe Never\ntest =\n    Nothing\n"
	);

	GeneratedModule {
		content,
		examples: examples.to_string(),
	}
}

/// Extract the examples segment from `source` and render the module in one
/// step.
pub fn generate_from_source(source: &str, marker: &str, module_name: &str) -> GeneratedModule {
	let examples = examples_segment(source, marker);
	if examples.is_empty() && !source.contains(marker) {
		tracing::warn!(marker, "marker not found, generating an empty examples block");
	}

	render_module(module_name, examples)
}
