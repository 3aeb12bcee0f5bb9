use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use root_access_broker::adapters::{self, iam::IamLoginProfileAdmin};
use root_access_broker::config::BrokerConfig;
use root_access_broker::core::login_profile;
use root_access_broker::utils::{logger, validation::Validate};
use root_access_broker::{HttpRequest, HttpResponse, Responder};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = BrokerConfig::from_env()?;
    config.validate()?;

    let shared = adapters::load_shared_config(&config).await;
    let admin = IamLoginProfileAdmin::new(&shared, &config);
    let responder = Responder::new(&config.domain);

    let admin = &admin;
    let responder = &responder;
    run(service_fn(move |event: LambdaEvent<HttpRequest>| async move {
        Ok::<HttpResponse, Error>(
            login_profile::create_profile(admin, responder, &event.payload).await,
        )
    }))
    .await
}
