use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::{json, Value};
use snafu::{ResultExt, Snafu};

use crate::service::laybuy::{
    client::LaybuyClient,
    config::Config,
    constants::{LAYBUY_FIELD_REFERENCE_ORDER_ID, SUPPORTED_CURRENCY_CODES},
    error::LaybuyError,
    StoreId,
};

#[derive(Debug, Snafu)]
pub enum CommandError {
    #[snafu(display("invalid argument {name}: {message}"))]
    InvalidArgument { name: String, message: String },
    #[snafu(display("unknown command {name}"))]
    UnknownCommand { name: String },
    #[snafu(display("{source}"))]
    Laybuy { source: LaybuyError },
}

fn payload_arg() -> Arg {
    Arg::new("payload")
        .long("payload")
        .help("request body as a json object")
        .required(true)
        .action(ArgAction::Set)
}

fn token_arg() -> Arg {
    Arg::new("token")
        .long("token")
        .help("laybuy token returned when the order was created")
        .required(true)
        .action(ArgAction::Set)
}

pub fn create_order_command() -> Command {
    Command::new("create-order")
        .about("create an order at laybuy and print the redirect url and token")
        .arg(payload_arg())
}

pub fn confirm_order_command() -> Command {
    Command::new("confirm-order")
        .about("confirm a laybuy order and print its order id")
        .arg(token_arg())
}

pub fn cancel_order_command() -> Command {
    Command::new("cancel-order")
        .about("cancel a laybuy order")
        .arg(token_arg())
}

pub fn refund_order_command() -> Command {
    Command::new("refund-order")
        .about("refund a laybuy order and print the refund id")
        .arg(payload_arg())
}

pub fn check_merchant_order_command() -> Command {
    Command::new("check-merchant-order")
        .about("look an order up by merchant reference")
        .arg(
            Arg::new("reference")
                .long("reference")
                .help("merchant reference of the order")
                .required(true)
                .action(ArgAction::Set),
        )
}

pub fn show_settings_command() -> Command {
    Command::new("show-settings").about("print the laybuy settings resolved for the store")
}

pub fn commands() -> Vec<Command> {
    vec![
        create_order_command(),
        confirm_order_command(),
        cancel_order_command(),
        refund_order_command(),
        check_merchant_order_command(),
        show_settings_command(),
    ]
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, CommandError> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CommandError::InvalidArgument {
            name: name.to_string(),
            message: "value is required".to_string(),
        })
}

fn payload(matches: &ArgMatches) -> Result<Value, CommandError> {
    let raw = required(matches, "payload")?;
    let value: Value = serde_json::from_str(raw).map_err(|e| CommandError::InvalidArgument {
        name: "payload".to_string(),
        message: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(CommandError::InvalidArgument {
            name: "payload".to_string(),
            message: "must be a json object".to_string(),
        });
    }
    Ok(value)
}

pub struct LaybuyCommand {
    client: LaybuyClient,
}

impl LaybuyCommand {
    pub fn new(client: LaybuyClient) -> Self {
        LaybuyCommand { client }
    }

    /// Runs the matched subcommand and returns what should be printed.
    pub async fn run(&self, matches: &ArgMatches) -> Result<Value, CommandError> {
        let (name, sub_matches) = match matches.subcommand() {
            Some(sub) => sub,
            None => {
                return Err(CommandError::UnknownCommand {
                    name: String::new(),
                })
            }
        };
        let store_id = sub_matches
            .get_one::<StoreId>("store_id")
            .or_else(|| matches.get_one::<StoreId>("store_id"))
            .copied();
        tracing::info!("running {} for store {:?}", name, store_id);

        match name {
            "create-order" => {
                let order = payload(sub_matches)?;
                let res = self
                    .client
                    .get_redirect_url_and_token(&order, store_id)
                    .await
                    .context(LaybuySnafu)?;
                Ok(res.map_or(Value::Bool(false), |r| json!(r)))
            }
            "confirm-order" => {
                let token = required(sub_matches, "token")?;
                let res = self
                    .client
                    .get_confirmation_order_id(token, store_id)
                    .await
                    .context(LaybuySnafu)?;
                Ok(res.map_or(Value::Bool(false), |order_id| {
                    json!({ LAYBUY_FIELD_REFERENCE_ORDER_ID: order_id })
                }))
            }
            "cancel-order" => {
                let token = required(sub_matches, "token")?;
                let cancelled = self
                    .client
                    .cancel_order(token, store_id)
                    .await
                    .context(LaybuySnafu)?;
                Ok(Value::Bool(cancelled))
            }
            "refund-order" => {
                let refund = payload(sub_matches)?;
                let refund_id = self
                    .client
                    .refund_order(&refund, store_id)
                    .await
                    .context(LaybuySnafu)?;
                Ok(json!({ "refund_id": refund_id }))
            }
            "check-merchant-order" => {
                let reference = required(sub_matches, "reference")?;
                let res = self
                    .client
                    .check_merchant_order(reference, store_id)
                    .await
                    .context(LaybuySnafu)?;
                Ok(res.unwrap_or(Value::Bool(false)))
            }
            "show-settings" => Ok(self.settings(store_id)),
            other => Err(CommandError::UnknownCommand {
                name: other.to_string(),
            }),
        }
    }

    fn settings(&self, store_id: Option<StoreId>) -> Value {
        let config = self.client.config();
        json!({
            "active": config.is_active(store_id),
            "sandbox": config.use_sandbox(store_id),
            "configured": config.merchant_id(store_id).is_some() && config.api_key(store_id).is_some(),
            "title": config.title(store_id),
            "payment_action": config.payment_action(store_id),
            "logo_url": Config::asset_url(config.logo(store_id)),
            "show_in_product_page": config.show_in_product_page(store_id),
            "show_in_category_page": config.show_in_category_page(store_id),
            "show_in_cart_page": config.show_in_cart_page(store_id),
            "min_order_total": config.min_order_total(store_id).map(|v| v.to_string()),
            "max_order_total": config.max_order_total(store_id).map(|v| v.to_string()),
            "supported_currencies": SUPPORTED_CURRENCY_CODES,
        })
    }
}
