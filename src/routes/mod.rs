use actix_web::web;

pub mod account;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/account")
            .service(
                web::scope("/register")
                    .service(account::register::form)
                    .service(account::register::submit),
            )
            .service(
                web::scope("/login")
                    .service(account::login::form)
                    .service(account::login::submit),
            )
            .service(web::scope("/logout").service(account::logout::logout))
            .service(web::scope("/confirm_email").service(account::confirm::confirm_email))
            .service(
                web::scope("/confirm_registration")
                    .service(account::confirm::confirm_registration),
            )
            .service(
                web::scope("/profile")
                    .service(
                        web::scope("/edit")
                            .service(account::edit_profile::form)
                            .service(account::edit_profile::submit),
                    )
                    .service(account::profile::view),
            ),
    );
}
