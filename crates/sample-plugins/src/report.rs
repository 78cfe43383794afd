//! Built-in `report` module of example generators.
//!
//! These functions cover the common directive shapes: argument-keyed
//! lookups (`swVer`), counter-backed sequential IDs (`buttonid`, `HWid`,
//! `ARMid`, `WidgetName`, `ScreenName`, `SKU`), constants (`EinsteinID`)
//! and random picks (`ButtonAction`, `RandomValues`). Registration uses
//! the directive spelling (`swVer`, `HWid`), so schemas address these
//! functions exactly as written.

use crate::context::PluginContext;
use crate::registry::{PluginFn, PluginModule};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

/// Module descriptor registered under the name `report`.
pub static MODULE: PluginModule = PluginModule {
    name: "report",
    functions: &[
        ("swVer", sw_ver as PluginFn),
        ("buttonid", button_id),
        ("HWid", hw_id),
        ("ARMid", arm_id),
        ("EinsteinID", einstein_id),
        ("ButtonAction", button_action),
        ("WidgetName", widget_name),
        ("ScreenName", screen_name),
        ("RandomValues", random_values),
        ("SKU", sku),
    ],
};

/// Software version keyed by the item kind passed as the first argument.
fn sw_ver(_context: &mut PluginContext, args: Option<&[String]>) -> Value {
    let version = args.and_then(|a| a.first()).map(|item| match item.as_str() {
        "consoleitem" => "sw-console-v1.2",
        "instrumentitem" => "sw-instrument-v1.2",
        "armitem" => "sw-arm-v1.2",
        "toweritem" => "sw-tower-v1.2",
        _ => "INVALID ARGUMENT LIST",
    });
    Value::from(version.unwrap_or("INVALID ARGUMENT LIST"))
}

fn button_id(context: &mut PluginContext, _args: Option<&[String]>) -> Value {
    Value::from(format!("buttonid-{}", context.counters.next("buttonid")))
}

fn hw_id(context: &mut PluginContext, _args: Option<&[String]>) -> Value {
    Value::from(format!("hardware-id-{}", context.counters.next("hwid")))
}

fn arm_id(context: &mut PluginContext, _args: Option<&[String]>) -> Value {
    Value::from(format!("arm-id-{}", context.counters.next("armid")))
}

fn einstein_id(_context: &mut PluginContext, _args: Option<&[String]>) -> Value {
    Value::from("einstein-id-1")
}

fn button_action(context: &mut PluginContext, _args: Option<&[String]>) -> Value {
    let action = if context.rng().gen() {
        "pushed"
    } else {
        "released"
    };
    Value::from(action)
}

fn widget_name(context: &mut PluginContext, _args: Option<&[String]>) -> Value {
    Value::from(format!("widget{}", context.counters.next("widgetid")))
}

fn screen_name(context: &mut PluginContext, _args: Option<&[String]>) -> Value {
    Value::from(format!("screen{}", context.counters.next("screenid")))
}

/// Random pick from a fixed mixed pool, stringified.
fn random_values(context: &mut PluginContext, _args: Option<&[String]>) -> Value {
    const ANSWERS: &[&str] = &[
        "1",
        "3.14159265",
        "100",
        "Input 1",
        "Input 2",
        "Somemore input",
    ];
    let answer = ANSWERS.choose(context.rng()).copied().unwrap_or_default();
    Value::from(answer)
}

fn sku(context: &mut PluginContext, _args: Option<&[String]>) -> Value {
    Value::from(format!("sku-{}", context.counters.next("skuid")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sw_ver_is_deterministic() {
        let mut context = PluginContext::new(0);
        let args = vec!["armitem".to_string()];
        for _ in 0..3 {
            assert_eq!(sw_ver(&mut context, Some(&args)), json!("sw-arm-v1.2"));
        }
    }

    #[test]
    fn test_sw_ver_without_args() {
        let mut context = PluginContext::new(0);
        assert_eq!(sw_ver(&mut context, None), json!("INVALID ARGUMENT LIST"));
    }

    #[test]
    fn test_counter_ids_are_sequential() {
        let mut context = PluginContext::new(0);
        assert_eq!(button_id(&mut context, None), json!("buttonid-0"));
        assert_eq!(button_id(&mut context, None), json!("buttonid-1"));
        // independent counter keys
        assert_eq!(hw_id(&mut context, None), json!("hardware-id-0"));
        assert_eq!(sku(&mut context, None), json!("sku-0"));
    }

    #[test]
    fn test_button_action_values() {
        let mut context = PluginContext::new(42);
        for _ in 0..20 {
            let action = button_action(&mut context, None);
            let action = action.as_str().unwrap();
            assert!(action == "pushed" || action == "released");
        }
    }

    #[test]
    fn test_random_values_draws_from_pool() {
        let mut context = PluginContext::new(42);
        for _ in 0..20 {
            let value = random_values(&mut context, None);
            let value = value.as_str().unwrap();
            assert!([
                "1",
                "3.14159265",
                "100",
                "Input 1",
                "Input 2",
                "Somemore input"
            ]
            .contains(&value));
        }
    }
}
