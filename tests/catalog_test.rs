//! Catalog client integration tests against a mock HTTP server.

use httpmock::prelude::*;
use ladle::catalog::{CatalogCache, CatalogClient};
use ladle::recipe::RecipeId;
use ladle::LadleError;
use tempfile::TempDir;

#[test]
fn categories_are_normalized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200).json_body(serde_json::json!({
            "categories": [
                {"idCategory": "1", "strCategory": "Beef"},
                {"categoryName": "Dessert", "categoryDescription": "Sweet things"},
                {"idCategory": "3"}
            ]
        }));
    });

    let client = CatalogClient::new(server.base_url());
    let categories = client.categories().unwrap();

    // The nameless record is dropped at the boundary.
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Beef");
    assert_eq!(categories[1].description.as_deref(), Some("Sweet things"));
}

#[test]
fn recipe_listings_accept_both_id_spellings() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/recipes")
            .query_param("category", "Seafood");
        then.status(200).json_body(serde_json::json!({
            "recipes": [
                {"idFood": "10", "recipeName": "Grilled Salmon"},
                {"idMeal": "11", "strMeal": "Fish Pie"},
                {"recipeName": "No id, dropped"}
            ]
        }));
    });

    let client = CatalogClient::new(server.base_url());
    let recipes = client.recipes_in_category("Seafood").unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].id, RecipeId::new("10"));
    assert_eq!(recipes[1].id, RecipeId::new("11"));
}

#[test]
fn single_recipe_lookup() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/recipes/10");
        then.status(200).json_body(serde_json::json!({
            "recipes": [{
                "idFood": "10",
                "recipeName": "Grilled Salmon",
                "cookingTime": 25,
                "servings": 2,
                "ingredients": [{"ingredientName": "Salmon", "measure": "2 fillets"}]
            }]
        }));
    });

    let client = CatalogClient::new(server.base_url());
    let recipe = client.recipe(&RecipeId::new("10")).unwrap();

    assert_eq!(recipe.name, "Grilled Salmon");
    assert_eq!(recipe.cooking_time_minutes, Some(25));
    assert_eq!(recipe.ingredients.len(), 1);
}

#[test]
fn empty_lookup_is_unknown_recipe() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/recipes/404");
        then.status(200).json_body(serde_json::json!({"recipes": []}));
    });

    let client = CatalogClient::new(server.base_url());
    let err = client.recipe(&RecipeId::new("404")).unwrap_err();
    assert!(matches!(err, LadleError::UnknownRecipe { .. }));
}

#[test]
fn http_failure_surfaces_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(503);
    });

    let client = CatalogClient::new(server.base_url());
    let err = client.categories().unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[test]
fn fresh_cache_hit_skips_the_network() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200)
            .json_body(serde_json::json!({"categories": [{"strCategory": "Beef"}]}));
    });

    let temp = TempDir::new().unwrap();
    let client = CatalogClient::new(server.base_url())
        .with_cache(CatalogCache::new(temp.path()), 3600);

    assert_eq!(client.categories().unwrap().len(), 1);
    assert_eq!(client.categories().unwrap().len(), 1);

    mock.assert_hits(1);
}

#[test]
fn expired_cache_entry_refetches() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200)
            .json_body(serde_json::json!({"categories": [{"strCategory": "Beef"}]}));
    });

    let temp = TempDir::new().unwrap();
    let client = CatalogClient::new(server.base_url())
        .with_cache(CatalogCache::new(temp.path()), 0);

    client.categories().unwrap();
    client.categories().unwrap();

    mock.assert_hits(2);
}

#[test]
fn offline_serves_stale_cache_without_requests() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200)
            .json_body(serde_json::json!({"categories": [{"strCategory": "Beef"}]}));
    });

    let temp = TempDir::new().unwrap();

    // Warm the cache with an entry that expires immediately.
    let online = CatalogClient::new(server.base_url())
        .with_cache(CatalogCache::new(temp.path()), 0);
    online.categories().unwrap();

    let offline = CatalogClient::new(server.base_url())
        .with_cache(CatalogCache::new(temp.path()), 0)
        .offline(true);
    let categories = offline.categories().unwrap();

    assert_eq!(categories.len(), 1);
    mock.assert_hits(1);
}

#[test]
fn offline_without_cache_entry_fails() {
    let temp = TempDir::new().unwrap();
    let client = CatalogClient::new("http://127.0.0.1:1")
        .with_cache(CatalogCache::new(temp.path()), 3600)
        .offline(true);

    let err = client.categories().unwrap_err();
    assert!(err.to_string().contains("offline"));
}
