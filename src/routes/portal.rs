use actix_web::web;

use crate::handlers::portal::{catalog_handler, game_handler, medal_handler};

pub fn init_portal_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .service(web::resource("/news").route(web::get().to(catalog_handler::list_news)))
        .service(web::resource("/news/{id}").route(web::get().to(catalog_handler::get_news)))
        .service(web::resource("/sports").route(web::get().to(catalog_handler::list_sports)))
        .service(web::resource("/sports/{id}").route(web::get().to(catalog_handler::get_sport)))
        .service(web::resource("/teams").route(web::get().to(catalog_handler::list_teams)))
        .service(web::resource("/teams/{id}").route(web::get().to(catalog_handler::get_team)))
        .service(web::resource("/games").route(web::get().to(game_handler::list_games)))
        .service(
            web::resource("/games/sport/{sport_id}")
                .route(web::get().to(game_handler::list_games_by_sport))
        )
        .service(web::resource("/games/{id}").route(web::get().to(game_handler::get_game)))
        .service(web::resource("/medals").route(web::get().to(medal_handler::list_standings)))
        .service(
            web::resource("/medals/{team_id}")
                .route(web::get().to(medal_handler::get_team_standing))
        );
}
