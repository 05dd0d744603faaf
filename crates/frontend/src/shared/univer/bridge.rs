//! Univer workbook mounted into a container element via the UMD globals
//! loaded by `index.html`.

use super::slot::WidgetInstance;
use contracts::dashboards::d400_pl_report::WorkbookSnapshot;
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Window};

/// One plugin: UMD namespace on `window`, exported class, and whether it takes
/// the `{ container }` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginSpec {
    pub namespace: &'static str,
    pub export: &'static str,
    pub with_container: bool,
}

const fn plugin(namespace: &'static str, export: &'static str) -> PluginSpec {
    PluginSpec {
        namespace,
        export,
        with_container: false,
    }
}

/// Registration order. Engines first, then the UI shell, documents before
/// sheets, each core plugin before its UI counterpart.
pub const PLUGIN_ORDER: [PluginSpec; 10] = [
    plugin("UniverEngineRender", "UniverRenderEnginePlugin"),
    plugin("UniverEngineFormula", "UniverFormulaEnginePlugin"),
    PluginSpec {
        namespace: "UniverUi",
        export: "UniverUIPlugin",
        with_container: true,
    },
    plugin("UniverDocs", "UniverDocsPlugin"),
    plugin("UniverDocsUi", "UniverDocsUIPlugin"),
    plugin("UniverSheets", "UniverSheetsPlugin"),
    plugin("UniverSheetsUi", "UniverSheetsUIPlugin"),
    plugin("UniverSheetsFormula", "UniverSheetsFormulaPlugin"),
    plugin("UniverSheetsNumfmt", "UniverSheetsNumfmtPlugin"),
    plugin("UniverSheetsNumfmtUi", "UniverSheetsNumfmtUIPlugin"),
];

#[derive(Debug)]
pub struct UniverWidget {
    instance: JsValue,
}

impl UniverWidget {
    /// Build a Univer instance inside `container` and load `snapshot` as a
    /// sheet unit. A partially built instance is disposed before the error is
    /// returned.
    pub fn mount(
        container: &HtmlElement,
        snapshot: &WorkbookSnapshot,
        locale: &str,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
        let core = global(&window, "UniverCore")?;

        let options = Object::new();
        if let Ok(design) = global(&window, "UniverDesign") {
            let theme = Reflect::get(&design, &JsValue::from_str("defaultTheme"))?;
            Reflect::set(&options, &JsValue::from_str("theme"), &theme)?;
        }
        let locale_types = Reflect::get(&core, &JsValue::from_str("LocaleType"))?;
        let locale_value = Reflect::get(&locale_types, &JsValue::from_str(locale))?;
        if !locale_value.is_undefined() {
            Reflect::set(&options, &JsValue::from_str("locale"), &locale_value)?;
        }

        let ctor: Function = Reflect::get(&core, &JsValue::from_str("Univer"))?.dyn_into()?;
        let instance = Reflect::construct(&ctor, &Array::of1(&options))?;
        let widget = UniverWidget { instance };

        let built = widget
            .register_plugins(&window, container)
            .and_then(|_| widget.create_sheet(&core, snapshot));
        if let Err(err) = built {
            widget.dispose();
            return Err(err);
        }

        log::debug!(
            "univer mounted: workbook '{}' with {} sheet(s)",
            snapshot.name,
            snapshot.sheet_count()
        );
        Ok(widget)
    }

    fn register_plugins(&self, window: &Window, container: &HtmlElement) -> Result<(), JsValue> {
        let register = method(&self.instance, "registerPlugin")?;
        for entry in PLUGIN_ORDER.iter() {
            let namespace = global(window, entry.namespace)?;
            let plugin = Reflect::get(&namespace, &JsValue::from_str(entry.export))?;
            if plugin.is_undefined() {
                return Err(JsValue::from_str(&format!(
                    "{}.{} is not loaded",
                    entry.namespace, entry.export
                )));
            }

            if entry.with_container {
                let config = Object::new();
                Reflect::set(&config, &JsValue::from_str("container"), container.as_ref())?;
                for flag in ["header", "toolbar", "footer"] {
                    Reflect::set(&config, &JsValue::from_str(flag), &JsValue::TRUE)?;
                }
                register.call2(&self.instance, &plugin, &config)?;
            } else {
                register.call1(&self.instance, &plugin)?;
            }
        }
        Ok(())
    }

    fn create_sheet(&self, core: &JsValue, snapshot: &WorkbookSnapshot) -> Result<(), JsValue> {
        let unit_types = Reflect::get(core, &JsValue::from_str("UniverInstanceType"))?;
        let sheet_type = Reflect::get(&unit_types, &JsValue::from_str("UNIVER_SHEET"))?;
        let data = snapshot
            .serialize(&Serializer::json_compatible())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        method(&self.instance, "createUnit")?.call2(&self.instance, &sheet_type, &data)?;
        Ok(())
    }
}

impl WidgetInstance for UniverWidget {
    fn dispose(&self) {
        let result = method(&self.instance, "dispose").and_then(|f| f.call0(&self.instance));
        if let Err(err) = result {
            log::warn!("univer dispose failed: {:?}", err);
        }
    }
}

fn global(window: &Window, name: &str) -> Result<JsValue, JsValue> {
    let value = Reflect::get(window, &JsValue::from_str(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(JsValue::from_str(&format!("{} is not loaded", name)));
    }
    Ok(value)
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(name))?;
    if !value.is_function() {
        return Err(JsValue::from_str(&format!("{} is not a function", name)));
    }
    value.dyn_into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(export: &str) -> usize {
        PLUGIN_ORDER
            .iter()
            .position(|p| p.export == export)
            .unwrap_or_else(|| panic!("{} missing", export))
    }

    #[test]
    fn test_plugin_dependencies_come_first() {
        let before = [
            ("UniverRenderEnginePlugin", "UniverUIPlugin"),
            ("UniverFormulaEnginePlugin", "UniverUIPlugin"),
            ("UniverUIPlugin", "UniverDocsPlugin"),
            ("UniverDocsPlugin", "UniverDocsUIPlugin"),
            ("UniverDocsUIPlugin", "UniverSheetsPlugin"),
            ("UniverSheetsPlugin", "UniverSheetsUIPlugin"),
            ("UniverSheetsUIPlugin", "UniverSheetsNumfmtPlugin"),
            ("UniverSheetsNumfmtPlugin", "UniverSheetsNumfmtUIPlugin"),
            ("UniverFormulaEnginePlugin", "UniverSheetsFormulaPlugin"),
            ("UniverSheetsPlugin", "UniverSheetsFormulaPlugin"),
        ];
        for (first, second) in before {
            assert!(
                position(first) < position(second),
                "{} must register before {}",
                first,
                second
            );
        }
    }

    #[test]
    fn test_only_ui_plugin_takes_container() {
        let with_container: Vec<_> = PLUGIN_ORDER
            .iter()
            .filter(|p| p.with_container)
            .map(|p| p.export)
            .collect();
        assert_eq!(with_container, vec!["UniverUIPlugin"]);
    }
}
