mod common;

use common::{assert_request, MockEnvironment};
use mcp_spoonacular::client::params::{
    Nutrient, NutrientFilter, SearchRecipes, SearchRecipesByNutrients, SearchRecipesComplex,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_search_recipes_by_ingredients() {
    common::init_test_logging();
    let env = MockEnvironment::ok().await;

    env.client
        .search_recipes_by_ingredients("apples,flour,sugar", Some(5), Some(1), None, None, None)
        .await
        .expect("Search should succeed");

    let request = env.single_request().await;
    assert_request(
        &request,
        "GET",
        "/recipes/findByIngredients",
        &[("ingredients", "apples,flour,sugar"), ("number", "5"), ("ranking", "1")],
        &[],
    );
    assert!(request.body.is_empty(), "GET requests carry no body");
}

#[tokio::test]
async fn test_search_recipes_by_ingredients_all_flags() {
    let env = MockEnvironment::ok().await;

    env.client
        .search_recipes_by_ingredients("eggs", None, Some(2), Some(false), Some(false), Some(true))
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/findByIngredients",
        &[
            ("ingredients", "eggs"),
            ("ranking", "2"),
            ("fillIngredients", "false"),
            ("limitLicense", "false"),
            ("ignorePantry", "true"),
        ],
        &[],
    );
}

#[tokio::test]
async fn test_parse_ingredients() {
    common::init_test_logging();
    let env = MockEnvironment::ok().await;

    env.client
        .parse_ingredients("3 oz pork shoulder", 2, Some(false))
        .await
        .expect("Parse should succeed");

    assert_request(
        &env.single_request().await,
        "POST",
        "/recipes/parseIngredients",
        &[("includeNutrition", "false")],
        &[("ingredientList", "3 oz pork shoulder"), ("servings", "2")],
    );
}

#[tokio::test]
async fn test_parse_ingredients_without_nutrition_flag() {
    let env = MockEnvironment::ok().await;

    env.client
        .parse_ingredients("1 cup flour\n2 eggs", 1, None)
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "POST",
        "/recipes/parseIngredients",
        &[],
        &[("ingredientList", "1 cup flour\n2 eggs"), ("servings", "1")],
    );
}

#[tokio::test]
async fn test_search_recipes() {
    let env = MockEnvironment::ok().await;
    let search = SearchRecipes {
        query: "burger".to_string(),
        diet: Some("vegetarian".to_string()),
        intolerances: vec!["gluten".to_string(), "dairy".to_string()],
        number: Some(10),
        dish_type: Some("main course".to_string()),
        ..Default::default()
    };

    env.client.search_recipes(&search).await.unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/search",
        &[
            ("query", "burger"),
            ("diet", "vegetarian"),
            ("intolerances", "gluten,dairy"),
            ("number", "10"),
            ("type", "main course"),
        ],
        &[],
    );
}

#[tokio::test]
async fn test_search_recipes_complex() {
    let env = MockEnvironment::ok().await;
    let search = SearchRecipesComplex {
        query: Some("pasta".to_string()),
        include_ingredients: vec!["tomato".to_string()],
        max_ready_time: Some(30),
        add_recipe_information: Some(true),
        nutrients: NutrientFilter::new().max(Nutrient::Calories, 800.0),
        ..Default::default()
    };

    env.client.search_recipes_complex(&search).await.unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/searchComplex",
        &[
            ("query", "pasta"),
            ("includeIngredients", "tomato"),
            ("maxReadyTime", "30"),
            ("addRecipeInformation", "true"),
            ("maxCalories", "800.0"),
        ],
        &[],
    );
}

#[tokio::test]
async fn test_search_recipes_by_nutrients() {
    let env = MockEnvironment::ok().await;
    let search = SearchRecipesByNutrients {
        nutrients: NutrientFilter::new()
            .range(Nutrient::Protein, 20.0, 40.5)
            .max(Nutrient::Sugar, 10.0),
        random: Some(true),
        ..Default::default()
    };

    env.client.search_recipes_by_nutrients(&search).await.unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/findByNutrients",
        &[
            ("minProtein", "20.0"),
            ("maxProtein", "40.5"),
            ("maxSugar", "10.0"),
            ("random", "true"),
        ],
        &[],
    );
}

#[tokio::test]
async fn test_autocomplete_recipe_search() {
    let env = MockEnvironment::ok().await;

    env.client
        .autocomplete_recipe_search("chicken", Some(10))
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/autocomplete",
        &[("query", "chicken"), ("number", "10")],
        &[],
    );
}

#[tokio::test]
async fn test_get_random_recipes() {
    let env = MockEnvironment::ok().await;

    env.client
        .get_random_recipes(Some(1), Some("vegetarian,dessert"), Some(false))
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/random",
        &[("number", "1"), ("tags", "vegetarian,dessert"), ("limitLicense", "false")],
        &[],
    );
}

#[tokio::test]
async fn test_get_random_recipes_without_arguments() {
    let env = MockEnvironment::ok().await;

    env.client.get_random_recipes(None, None, None).await.unwrap();

    let request = env.single_request().await;
    assert_request(&request, "GET", "/recipes/random", &[], &[]);
    assert_eq!(request.url.query(), None, "No empty query string for unset arguments");
}

#[tokio::test]
async fn test_get_similar_recipes() {
    let env = MockEnvironment::ok().await;

    env.client
        .get_similar_recipes(156992, Some(3), None)
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/156992/similar",
        &[("number", "3")],
        &[],
    );
}

#[tokio::test]
async fn test_get_recipe_information() {
    let env = MockEnvironment::ok().await;

    env.client
        .get_recipe_information(479101, Some(false))
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/479101/information",
        &[("includeNutrition", "false")],
        &[],
    );
}

#[tokio::test]
async fn test_get_recipe_information_bulk() {
    let env = MockEnvironment::ok().await;

    env.client
        .get_recipe_information_bulk(&[987, 321], Some(true))
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/informationBulk",
        &[("ids", "987,321"), ("includeNutrition", "true")],
        &[],
    );
}

#[tokio::test]
async fn test_get_analyzed_recipe_instructions() {
    let env = MockEnvironment::ok().await;

    env.client
        .get_analyzed_recipe_instructions(324694, Some(true))
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/324694/analyzedInstructions",
        &[("stepBreakdown", "true")],
        &[],
    );
}

#[tokio::test]
async fn test_summarize_recipe() {
    let env = MockEnvironment::ok().await;

    env.client.summarize_recipe(4632).await.unwrap();

    assert_request(&env.single_request().await, "GET", "/recipes/4632/summary", &[], &[]);
}

#[tokio::test]
async fn test_analyze_a_recipe_search_query() {
    let env = MockEnvironment::ok().await;

    env.client
        .analyze_a_recipe_search_query("salmon with fusilli and no nuts")
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/queries/analyze",
        &[("q", "salmon with fusilli and no nuts")],
        &[],
    );
}

#[tokio::test]
async fn test_analyze_recipe_instructions() {
    let env = MockEnvironment::ok().await;

    env.client
        .analyze_recipe_instructions("Put the garlic in a pan and then add the onion.")
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "POST",
        "/recipes/analyzeInstructions",
        &[],
        &[("instructions", "Put the garlic in a pan and then add the onion.")],
    );
}

#[tokio::test]
async fn test_extract_recipe_from_website() {
    let env = MockEnvironment::ok().await;

    env.client
        .extract_recipe_from_website(
            "http://www.melskitchencafe.com/the-best-fudgy-brownies/",
            Some(false),
        )
        .await
        .unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/recipes/extract",
        &[
            ("url", "http://www.melskitchencafe.com/the-best-fudgy-brownies/"),
            ("forceExtraction", "false"),
        ],
        &[],
    );
}

#[tokio::test]
async fn test_detect_food_in_text() {
    let env = MockEnvironment::ok().await;
    let text = "I like to eat delicious tacos. Only cheeseburger with cheddar are better than that.";

    env.client.detect_food_in_text(text).await.unwrap();

    assert_request(
        &env.single_request().await,
        "POST",
        "/food/detect",
        &[],
        &[("text", text)],
    );
}

#[tokio::test]
async fn test_search_site_content() {
    let env = MockEnvironment::ok().await;

    env.client.search_site_content("past").await.unwrap();

    assert_request(
        &env.single_request().await,
        "GET",
        "/food/site/search",
        &[("query", "past")],
        &[],
    );
}
