use crate::error::ScaleError;
use crate::interpolate::interpolate_rgb;
use crate::models::scale::ColorScale;
use crate::reader::{is_scale_file, read_scale_file};
use crate::utils::style::{GRADIENT_PALETTES, SEQUENTIAL_PALETTES, gradient_scale, sequential_scale};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq)]
pub enum ScaleSource {
    Builtin,
    Gradient,
    File(PathBuf),
}

impl fmt::Display for ScaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleSource::Builtin => write!(f, "builtin"),
            ScaleSource::Gradient => write!(f, "colorgrad"),
            ScaleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    scale: ColorScale,
    source: ScaleSource,
}

/// Named colour scales, looked up case-insensitively.
///
/// A name ending in `_r` resolves to the reversed variant of its base scale
/// unless a scale with that exact name is registered.
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    scales: HashMap<String, Entry>,
}

impl ScaleRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self::try_builtin().expect("builtin palettes are well-formed")
    }

    pub fn try_builtin() -> Result<Self, ScaleError> {
        let mut registry = Self::empty();
        for (name, _) in SEQUENTIAL_PALETTES {
            registry.insert(sequential_scale(name)?, ScaleSource::Builtin);
        }
        for name in GRADIENT_PALETTES {
            registry.insert(gradient_scale(name)?, ScaleSource::Gradient);
        }
        Ok(registry)
    }

    /// Registers `scale`, returning any scale it replaced.
    pub fn insert(&mut self, scale: ColorScale, source: ScaleSource) -> Option<ColorScale> {
        self.scales
            .insert(scale.name().to_ascii_lowercase(), Entry { scale, source })
            .map(|old| old.scale)
    }

    /// Reads every scale file under `root`. Stops at the first file that
    /// fails to parse or validate, or whose name is already registered
    /// (case-insensitively, built-ins included), and returns the names loaded
    /// otherwise.
    pub fn load_dir<P: AsRef<Path>>(&mut self, root: P) -> Result<Vec<String>, ScaleError> {
        let root = root.as_ref();
        let mut loaded = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop"));
                ScaleError::Io { path, source }
            })?;
            if !entry.file_type().is_file() || !is_scale_file(entry.path()) {
                continue;
            }

            let scale = read_scale_file(entry.path())?;
            if let Some(existing) = self.source(scale.name()) {
                return Err(ScaleError::DuplicateScale {
                    name: scale.name().to_string(),
                    existing: existing.to_string(),
                    path: entry.path().to_path_buf(),
                });
            }
            loaded.push(scale.name().to_string());
            self.insert(scale, ScaleSource::File(entry.path().to_path_buf()));
        }

        Ok(loaded)
    }

    pub fn get(&self, name: &str) -> Result<Cow<'_, ColorScale>, ScaleError> {
        let key = name.to_ascii_lowercase();
        if let Some(entry) = self.scales.get(&key) {
            return Ok(Cow::Borrowed(&entry.scale));
        }
        if let Some(entry) = key.strip_suffix("_r").and_then(|base| self.scales.get(base)) {
            return Ok(Cow::Owned(entry.scale.reversed()));
        }
        Err(ScaleError::UnknownScale(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    pub fn source(&self, name: &str) -> Option<&ScaleSource> {
        self.scales
            .get(&name.to_ascii_lowercase())
            .map(|entry| &entry.source)
    }

    /// Registered names, sorted case-insensitively.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(scale, _)| scale.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColorScale, &ScaleSource)> {
        let mut keys: Vec<&String> = self.scales.keys().collect();
        keys.sort();
        keys.into_iter().map(|key| {
            let entry = &self.scales[key];
            (&entry.scale, &entry.source)
        })
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// `rgb(R,G,B)` for `value` within `[range_min, range_max]` on `scale_name`.
    ///
    /// The name is resolved before anything else, so an unknown scale is an
    /// error even when the range is degenerate.
    pub fn interpolate(
        &self,
        value: f64,
        range_min: f64,
        range_max: f64,
        scale_name: &str,
    ) -> Result<String, ScaleError> {
        let scale = self.get(scale_name)?;
        Ok(interpolate_rgb(&scale, value, range_min, range_max).to_string())
    }
}
