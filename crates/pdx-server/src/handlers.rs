use super::API;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use pdx_core::ID;
use pdx_dto::*;
use pdx_store::StoreError;

fn internal(e: StoreError) -> HttpResponse {
    log::error!("request failed: {}", e);
    HttpResponse::InternalServerError().json(Detail::new("internal server error"))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Health::healthy())
}

pub async fn run_pipeline(api: web::Data<API>, req: web::Query<RunPipeline>) -> impl Responder {
    let tally = api.pipeline().run(req.start_id, req.end_id).await;
    HttpResponse::Ok().json(tally)
}

pub async fn list(api: web::Data<API>, req: web::Query<ListPokemon>) -> impl Responder {
    match req.validate() {
        Err(e) => HttpResponse::BadRequest().json(Detail::new(e)),
        Ok(()) => match api.store().pokemon(req.skip, req.limit, req.kind()).await {
            Err(e) => internal(e),
            Ok(rows) => HttpResponse::Ok().json(rows),
        },
    }
}

pub async fn by_id(api: web::Data<API>, path: web::Path<i32>) -> impl Responder {
    match api.store().pokemon_by_id(ID::from(path.into_inner())).await {
        Err(e) => internal(e),
        Ok(None) => HttpResponse::NotFound().json(Detail::not_found()),
        Ok(Some(pokemon)) => HttpResponse::Ok().json(pokemon),
    }
}

pub async fn by_name(api: web::Data<API>, path: web::Path<String>) -> impl Responder {
    match api.store().pokemon_by_name(&path).await {
        Err(e) => internal(e),
        Ok(None) => HttpResponse::NotFound().json(Detail::not_found()),
        Ok(Some(pokemon)) => HttpResponse::Ok().json(pokemon),
    }
}

pub async fn types(api: web::Data<API>) -> impl Responder {
    match api.store().types().await {
        Err(e) => internal(e),
        Ok(types) => HttpResponse::Ok().json(types),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::middleware::NormalizePath;
    use actix_web::test;
    use pdx_pipeline::*;
    use pdx_store::*;
    use serde_json::Value;
    use serde_json::json;
    use std::sync::Arc;

    fn record(name: &str, kinds: &[&str]) -> Value {
        json!({
            "name": name,
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "sprites": {
                "front_default": "url1",
                "other": { "official-artwork": { "front_default": "url2" } }
            },
            "types": kinds.iter().map(|k| json!({ "type": { "name": k } })).collect::<Vec<_>>(),
            "abilities": [{ "ability": { "name": "static" } }],
            "stats": [{ "stat": { "name": "speed" }, "base_stat": 90, "effort": 2 }]
        })
    }

    fn api() -> web::Data<API> {
        let source = Fixtures::new()
            .with(1, record("bulbasaur", &["grass", "poison"]))
            .with(3, record("venusaur", &["grass", "poison"]))
            .with(4, record("charmander", &["fire"]))
            .with(25, record("pikachu", &["electric"]));
        web::Data::new(API::new(Arc::new(Memory::new()), Arc::new(source)))
    }

    macro_rules! app {
        ($api:expr) => {
            test::init_service(
                App::new()
                    .wrap(NormalizePath::trim())
                    .app_data($api.clone())
                    .configure(crate::routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn health_is_constant() {
        let api = api();
        let app = app!(api);
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "status": "healthy" }));
    }
    #[actix_web::test]
    async fn run_pipeline_reports_tally() {
        let api = api();
        let app = app!(api);
        let req = test::TestRequest::post()
            .uri("/pokemon/run-pipeline?start_id=1&end_id=4")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "successful": 3, "failed": 1 }));
        let census = api.store().census().await.unwrap();
        assert_eq!(census.pokemon, 3);
        assert_eq!(census.types, 3);
    }
    #[actix_web::test]
    async fn run_pipeline_defaults_to_first_twenty() {
        let api = api();
        let app = app!(api);
        let req = test::TestRequest::post()
            .uri("/pokemon/run-pipeline")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "successful": 3, "failed": 17 }));
    }
    #[actix_web::test]
    async fn listing_filters_by_type_and_paginates() {
        let api = api();
        api.pipeline().run(1, 25).await;
        let app = app!(api);
        let req = test::TestRequest::get()
            .uri("/pokemon?type_filter=grass")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let names = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["bulbasaur", "venusaur"]);
        let req = test::TestRequest::get()
            .uri("/pokemon?skip=1&limit=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let names = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["venusaur", "charmander"]);
    }
    #[actix_web::test]
    async fn lookups_return_nested_record() {
        let api = api();
        api.pipeline().run(25, 25).await;
        let app = app!(api);
        let req = test::TestRequest::get().uri("/pokemon/name/pikachu").to_request();
        let by_name: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_name["types"], json!([{ "id": 1, "name": "electric" }]));
        assert_eq!(by_name["abilities"], json!([{ "id": 1, "name": "static" }]));
        assert_eq!(
            by_name["stats"],
            json!([{ "id": 1, "name": "speed", "base_stat": 90, "effort": 2 }])
        );
        assert_eq!(by_name["official_artwork_url"], "url2");
        let uri = format!("/pokemon/{}", by_name["id"]);
        let req = test::TestRequest::get().uri(&uri).to_request();
        let by_id: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_id, by_name);
    }
    #[actix_web::test]
    async fn missing_records_are_not_found() {
        let api = api();
        let app = app!(api);
        for uri in ["/pokemon/7", "/pokemon/name/mew"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(res).await;
            assert_eq!(body, json!({ "detail": "Pokémon not found" }));
        }
    }
    #[actix_web::test]
    async fn malformed_parameters_are_bad_requests() {
        let api = api();
        let app = app!(api);
        for uri in ["/pokemon/pikachu", "/pokemon?skip=-1", "/pokemon?limit=many"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }
    #[actix_web::test]
    async fn trailing_slashes_are_accepted() {
        let api = api();
        let app = app!(api);
        for uri in ["/health/", "/types/", "/pokemon/", "/pokemon/name/mew/"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_ne!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
            assert!(
                res.status() == StatusCode::OK || res.status() == StatusCode::NOT_FOUND,
                "{}",
                uri
            );
        }
        let req = test::TestRequest::post()
            .uri("/pokemon/run-pipeline/?start_id=25&end_id=25")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "successful": 1, "failed": 0 }));
    }
    #[actix_web::test]
    async fn types_lists_distinct_names() {
        let api = api();
        api.pipeline().run(1, 4).await;
        let app = app!(api);
        let req = test::TestRequest::get().uri("/types").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "grass" },
                { "id": 2, "name": "poison" },
                { "id": 3, "name": "fire" }
            ])
        );
    }
}
