//! Template deserialization -- loading a `Template` from JSON.

use std::path::Path;

use tracing::{debug, info, warn};

use tpl_common::Template;

use crate::error::{TemplateError, TemplateResult};

/// Deserialize a template from a JSON string and validate it.
pub fn from_json_str(json: &str) -> TemplateResult<Template> {
    let template: Template = serde_json::from_str(json)?;

    debug!(
        duration_in_frames = template.duration_in_frames,
        fps = template.fps,
        layer_count = template.layers.len(),
        "Deserialized template from JSON"
    );

    validate_template(&template)?;

    Ok(template)
}

/// Load a template from a file at the given path.
///
/// A failure here leaves the editor without a document; callers render
/// their empty state and do not retry.
pub fn load_template(path: &Path) -> TemplateResult<Template> {
    if !path.exists() {
        return Err(TemplateError::NotFound {
            path: path.display().to_string(),
        });
    }

    let json = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read template file");
        TemplateError::Io(e)
    })?;

    let template = from_json_str(&json)?;

    info!(
        path = %path.display(),
        width = template.width,
        height = template.height,
        layers = template.layers.len(),
        "Template loaded"
    );

    Ok(template)
}

/// Validate structural requirements of a loaded template.
fn validate_template(template: &Template) -> TemplateResult<()> {
    if template.duration_in_frames == 0 {
        return Err(TemplateError::Invalid {
            reason: "durationInFrames must be positive".into(),
        });
    }

    if template.fps == 0 {
        return Err(TemplateError::Invalid {
            reason: "fps must be positive".into(),
        });
    }

    if template.width == 0 || template.height == 0 {
        return Err(TemplateError::Invalid {
            reason: format!("invalid canvas size: {}x{}", template.width, template.height),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for layer in &template.layers {
        if !seen.insert(layer.id.as_str()) {
            return Err(TemplateError::Invalid {
                reason: format!("duplicate layer id: {}", layer.id),
            });
        }

        if layer.end <= layer.start {
            return Err(TemplateError::Invalid {
                reason: format!(
                    "layer {} has end {} <= start {}",
                    layer.id, layer.end, layer.start
                ),
            });
        }

        // Lenient: a visual layer without a source or box still loads; the
        // preview simply skips it.
        if layer.kind.is_visual() && (layer.src.is_none() || layer.width.is_none()) {
            warn!(
                layer_id = %layer.id,
                kind = %layer.kind,
                "Visual layer is missing src or bounds and will not render"
            );
        }
    }

    Ok(())
}
