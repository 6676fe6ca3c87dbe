//! The host boundary: what the host offers a visual, what a visual offers the
//! host, and how the plugin gets registered.
//!
//! Registration is explicit. The host passes its registry to [`register`]
//! instead of the plugin looking one up.

use crate::error::Result;
use crate::models::UpdateOptions;
use crate::settings::VisualObjectInstance;
use crate::visual::{LineChartVisual, UpdateOutcome};
use std::collections::BTreeMap;

/// Plugin GUID the line chart registers under.
pub const PLUGIN_NAME: &str = "linechart015544EC07FC4820A7C1D7488D65A57C";
pub const DISPLAY_NAME: &str = "linechart";
pub const API_VERSION: &str = "2.6.0";

/// Services the host provides to a running visual.
pub trait VisualHost {
    /// Show a warning next to the visual without failing the update.
    fn display_warning_icon(&mut self, title: &str, detail: &str);
}

impl<H: VisualHost + ?Sized> VisualHost for Box<H> {
    fn display_warning_icon(&mut self, title: &str, detail: &str) {
        (**self).display_warning_icon(title, detail)
    }
}

/// Lifecycle calls the host makes on a visual.
pub trait Visual {
    /// Full redraw from the latest snapshot.
    fn update(&mut self, options: &UpdateOptions) -> UpdateOutcome;

    /// Formatting properties the user can edit for `object_name`.
    fn enumerate_object_instances(&self, object_name: &str) -> Vec<VisualObjectInstance>;

    /// Current drawing as an SVG document.
    fn to_svg(&self) -> Result<String>;
}

/// Passed to a plugin factory when the host mounts a visual.
pub struct ConstructorOptions {
    pub host: Box<dyn VisualHost>,
}

/// Plugin descriptor handed to the host's registry.
#[derive(Debug, Clone)]
pub struct VisualPlugin {
    pub name: String,
    pub display_name: String,
    pub class: String,
    pub api_version: String,
    pub custom: bool,
    pub factory: fn(ConstructorOptions) -> Box<dyn Visual>,
}

impl VisualPlugin {
    pub fn line_chart() -> Self {
        Self {
            name: PLUGIN_NAME.to_string(),
            display_name: DISPLAY_NAME.to_string(),
            class: "Visual".to_string(),
            api_version: API_VERSION.to_string(),
            custom: true,
            factory: create_line_chart,
        }
    }

    /// Same plugin under the `_DEBUG` name used by development builds.
    pub fn debug(mut self) -> Self {
        self.name.push_str("_DEBUG");
        self
    }

    pub fn create(&self, options: ConstructorOptions) -> Box<dyn Visual> {
        (self.factory)(options)
    }
}

fn create_line_chart(options: ConstructorOptions) -> Box<dyn Visual> {
    Box::new(LineChartVisual::new(options.host))
}

/// Anything that can hold plugin descriptors.
pub trait PluginRegistry {
    fn register_plugin(&mut self, plugin: VisualPlugin);
}

/// In-memory registry keyed by plugin name. Re-registering a name replaces it.
#[derive(Debug, Default)]
pub struct Plugins {
    plugins: BTreeMap<String, VisualPlugin>,
}

impl Plugins {
    pub fn get(&self, name: &str) -> Option<&VisualPlugin> {
        self.plugins.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl PluginRegistry for Plugins {
    fn register_plugin(&mut self, plugin: VisualPlugin) {
        self.plugins.insert(plugin.name.clone(), plugin);
    }
}

/// Register `plugin` with the host's registry.
pub fn register<R: PluginRegistry + ?Sized>(registry: &mut R, plugin: VisualPlugin) {
    log::debug!("registering visual plugin {}", plugin.name);
    registry.register_plugin(plugin);
}
