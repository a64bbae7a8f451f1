//! Properties that must hold across a corpus of documented methods.

use tcomment_core::{arg_indices, DocumentedMethod, ParamTag, ThrowsTag};
use tcomment_translator::{ThrowsMode, TranslatedMethod, Translator, TranslatorConfig};

const NPE: &str = "java.lang.NullPointerException";
const IAE: &str = "java.lang.IllegalArgumentException";

// ============================================================================
// Corpus
// ============================================================================

fn corpus() -> Vec<DocumentedMethod> {
    vec![
        DocumentedMethod::new("com.example.Strings", "isEmpty")
            .with_parameter("s", "java.lang.String")
            .with_param_tag(ParamTag::new("s", "the string to check, may be null")),
        DocumentedMethod::new("com.example.Collections", "addAll")
            .with_parameter("collection", "java.util.Collection")
            .with_parameter("elements", "java.lang.Object[]")
            .with_param_tag(ParamTag::new(
                "collection",
                "the collection to add to, must not be null",
            ))
            .with_param_tag(ParamTag::new("elements", "the elements, null is not permitted"))
            .with_throws_tag(ThrowsTag::new(NPE, "if collection or elements is null")),
        DocumentedMethod::new("com.example.Arrays", "fill")
            .with_parameter("array", "int[]")
            .with_parameter("from", "int")
            .with_parameter("to", "int")
            .with_parameter("value", "int")
            .with_param_tag(ParamTag::new("array", "the array, never null"))
            .with_throws_tag(ThrowsTag::new(IAE, "if from > to"))
            .with_throws_tag(ThrowsTag::new(NPE, "if array is null")),
        DocumentedMethod::new("com.example.Maps", "merge")
            .with_parameter("first", "java.util.Map")
            .with_parameter("second", "java.util.Map")
            .with_parameter("merger", "java.util.function.BinaryOperator")
            .with_throws_tag(ThrowsTag::new(NPE, "if either first, second or merger is null"))
            .with_throws_tag(ThrowsTag::new(NPE, "if merger and first are null")),
        DocumentedMethod::new("com.example.Empty", "run"),
        DocumentedMethod::new("com.example.Broken", "call")
            .with_parameter("x", "int")
            .with_param_tag(ParamTag::new("y", "must not be null"))
            .with_throws_tag(ThrowsTag::new(NPE, ""))
            .with_param_tag(ParamTag::new("x", "")),
    ]
}

fn conditions(translated: &TranslatedMethod) -> Vec<String> {
    translated
        .specification
        .guards()
        .map(|g| g.condition.clone())
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_every_index_is_valid_for_its_method() {
    let methods = corpus();
    for mode in [ThrowsMode::All, ThrowsMode::Gated] {
        let translator = Translator::new(TranslatorConfig::default().with_throws_mode(mode));
        for (method, translated) in methods.iter().zip(translator.translate(&methods)) {
            for condition in conditions(&translated) {
                for index in arg_indices(&condition) {
                    assert!(
                        index < method.parameters.len(),
                        "{condition} out of range for {}",
                        method.signature()
                    );
                }
            }
        }
    }
}

#[test]
fn test_translation_is_idempotent() {
    let methods = corpus();
    let translator = Translator::default();
    let first = serde_json::to_string(&translator.translate(&methods)).unwrap();
    let second = serde_json::to_string(&translator.translate(&methods)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_translation_is_order_independent() {
    let methods = corpus();
    let translator = Translator::default();
    let forward = translator.translate(&methods);

    let mut reversed_input = methods.clone();
    reversed_input.reverse();
    let mut reversed = translator.translate(&reversed_input);
    reversed.reverse();
    assert_eq!(forward, reversed);

    let rotated_input: Vec<DocumentedMethod> = methods[2..]
        .iter()
        .chain(methods[..2].iter())
        .cloned()
        .collect();
    let rotated = translator.translate(&rotated_input);
    for translated in &rotated {
        let original = forward
            .iter()
            .find(|t| t.signature == translated.signature)
            .unwrap();
        assert_eq!(original, translated);
    }
}

#[test]
fn test_expected_conditions_for_corpus() {
    let translated = Translator::default().translate(&corpus());
    let all: Vec<Vec<String>> = translated.iter().map(conditions).collect();

    assert_eq!(all[0], vec![""]);
    assert_eq!(
        all[1],
        vec![
            "(args[0]==null)==false",
            "(args[1]==null)==false",
            "args[0]==null || args[1]==null",
        ]
    );
    assert_eq!(all[2], vec!["(args[0]==null)==false", "", "args[0]==null"]);
    assert_eq!(
        all[3],
        vec![
            "args[0]==null || args[1]==null || args[2]==null",
            "args[2]==null || args[0]==null",
        ]
    );
    assert!(all[4].is_empty());
    assert_eq!(all[5], vec!["", "", ""]);
}

#[test]
fn test_gated_mode_on_corpus() {
    let translator = Translator::new(TranslatorConfig::default().with_throws_mode(ThrowsMode::Gated));
    let translated = translator.translate(&corpus());
    let merge = conditions(&translated[3]);
    assert_eq!(merge[0], "args[0]==null || args[1]==null || args[2]==null");
    assert_eq!(merge[1], "args[2]==null");
}
