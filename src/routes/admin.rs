use actix_web::web;

use crate::handlers::admin::{
    game_handler,
    medal_handler,
    news_handler,
    sport_handler,
    team_handler,
    user_handler,
};
use crate::middleware::admin::AdminMiddleware;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            // News
            .service(
                web::resource("/news")
                    .route(web::get().to(news_handler::get_news))
                    .route(web::post().to(news_handler::create_news))
            )
            .service(
                web::resource("/news/{id}")
                    .route(web::put().to(news_handler::update_news))
                    .route(web::delete().to(news_handler::delete_news))
            )

            // Sports
            .service(
                web::resource("/sports")
                    .route(web::get().to(sport_handler::get_sports))
                    .route(web::post().to(sport_handler::create_sport))
            )
            .service(
                web::resource("/sports/{id}")
                    .route(web::put().to(sport_handler::update_sport))
                    .route(web::delete().to(sport_handler::delete_sport))
            )

            // Teams
            .service(
                web::resource("/teams")
                    .route(web::get().to(team_handler::get_teams))
                    .route(web::post().to(team_handler::create_team))
            )
            .service(
                web::resource("/teams/{id}")
                    .route(web::put().to(team_handler::update_team))
                    .route(web::delete().to(team_handler::delete_team))
            )

            // Games
            .service(
                web::resource("/games")
                    .route(web::get().to(game_handler::get_games))
                    .route(web::post().to(game_handler::create_game))
            )
            .service(
                web::resource("/games/{id}")
                    .route(web::put().to(game_handler::update_game))
                    .route(web::delete().to(game_handler::delete_game))
            )

            // Medal standings are keyed by team
            .service(
                web::resource("/medals")
                    .route(web::post().to(medal_handler::create_standing))
            )
            .service(
                web::resource("/medals/{team_id}")
                    .route(web::put().to(medal_handler::update_standing))
                    .route(web::delete().to(medal_handler::delete_standing))
            )

            // Users
            .service(
                web::resource("/users")
                    .route(web::get().to(user_handler::get_users))
                    .route(web::post().to(user_handler::create_user))
            )
            .service(
                web::resource("/users/{id}")
                    .route(web::get().to(user_handler::get_user_by_id))
                    .route(web::put().to(user_handler::update_user))
                    .route(web::delete().to(user_handler::delete_user))
            )
    );
}
