mod common;

use common::{item, recipe, shelf_life, ScriptedCatalog};
use pantry_recipes::config::SuggestionConfig;
use pantry_recipes::selection::RecipeSuggester;
use pantry_recipes::types::{KeywordFingerprint, RecipeRecord, SelectionResult};

fn strip(json: &str) -> String {
    json.chars().filter(|c| !c.is_whitespace()).collect()
}

#[tokio::test]
async fn golden_suggestion_output() {
    let mut custard = recipe("53", "Egg and milk custard");
    custard
        .extra
        .insert("area".into(), serde_json::Value::String("British".into()));

    let catalog =
        ScriptedCatalog::new().respond("Milk,Egg", vec![recipe("52", "Pancakes"), custard]);
    let suggester = RecipeSuggester::new(catalog, shelf_life(), &SuggestionConfig::v0());
    let items = vec![item("Milk", 1), item("Egg", 10), item("Old Fish", -1)];

    let result = suggester.suggest(&items).await.unwrap();
    let json = serde_json::to_string_pretty(&result).unwrap();

    // Key order is part of the contract.
    let recipes_pos = json.find("\"recipes\":").expect("Missing recipes key");
    let total_pos = json.find("\"total\":").expect("Missing total key");
    let metadata_pos = json.find("\"metadata\":").expect("Missing metadata key");
    assert!(recipes_pos < total_pos);
    assert!(total_pos < metadata_pos);

    const EXPECTED_JSON: &str = r#"{
      "recipes": [
        {
          "recipe": {
            "id": "53",
            "name": "Egg and milk custard",
            "image_url": "https://img.example/53.jpg",
            "area": "British"
          },
          "hit_count": 2
        },
        {
          "recipe": {
            "id": "52",
            "name": "Pancakes",
            "image_url": "https://img.example/52.jpg"
          },
          "hit_count": 0
        }
      ],
      "total": 2,
      "metadata": {
        "keywords": ["Milk", "Egg"],
        "fingerprint": "sha256:d7d00bad63baa9d1f8b765182c3b27ac9d0c64f7afb012f5195f18fe317b38e8",
        "items_considered": 3,
        "usable_count": 2,
        "dropped_count": 1,
        "tier": "combined",
        "catalog_calls": 1
      }
    }"#;

    assert_eq!(strip(&json), strip(EXPECTED_JSON), "Golden snapshot mismatch");

    let roundtrip: SelectionResult = serde_json::from_str(&json).expect("Deserialization failed");
    assert_eq!(roundtrip, result);
    assert_eq!(
        roundtrip.recipes[0].recipe.extra.get("area"),
        Some(&serde_json::Value::String("British".into()))
    );
}

#[tokio::test]
async fn golden_empty_output() {
    let suggester =
        RecipeSuggester::new(ScriptedCatalog::new(), shelf_life(), &SuggestionConfig::v0());

    let result = suggester.suggest(&[item("Old Fish", -3)]).await.unwrap();

    const EXPECTED_JSON: &str = r#"{
      "recipes": [],
      "total": 0,
      "metadata": {
        "keywords": [],
        "fingerprint": null,
        "items_considered": 1,
        "usable_count": 0,
        "dropped_count": 1,
        "tier": null,
        "catalog_calls": 0
      }
    }"#;

    assert_eq!(strip(&serde_json::to_string(&result).unwrap()), strip(EXPECTED_JSON));
}

#[test]
fn fingerprint_depends_on_keywords_and_order() {
    let milk_egg = KeywordFingerprint::from_keywords(&["Milk".to_string(), "Egg".to_string()]);
    let egg_milk = KeywordFingerprint::from_keywords(&["Egg".to_string(), "Milk".to_string()]);
    let again = KeywordFingerprint::from_keywords(&["Milk".to_string(), "Egg".to_string()]);

    assert_eq!(milk_egg, again);
    assert_ne!(milk_egg, egg_milk);
    assert_eq!(
        milk_egg.as_str(),
        "sha256:d7d00bad63baa9d1f8b765182c3b27ac9d0c64f7afb012f5195f18fe317b38e8"
    );
}

#[test]
fn recipe_record_keeps_unknown_fields() {
    let record: RecipeRecord = serde_json::from_str(
        r#"{"id":"1","name":"Soup","image_url":"x.jpg","category":"Starter","rating":4}"#,
    )
    .unwrap();

    assert_eq!(record.id.as_str(), "1");
    assert_eq!(record.extra.len(), 2);
    assert_eq!(record.extra["rating"], serde_json::json!(4));

    let missing_image: RecipeRecord = serde_json::from_str(r#"{"id":"2","name":"Stew"}"#).unwrap();
    assert_eq!(missing_image.image_url, "");
}
