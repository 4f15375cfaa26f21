use clap::{ArgGroup, Args};
use garage_app::{
    database::{self, Db},
    domain::products::{
        PgProductsService, ProductsService, ProductsServiceError,
        data::StockMovement,
        records::ProductId,
    },
};

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("direction")
        .required(true)
        .args(["increase", "decrease"]),
))]
pub(crate) struct MoveArgs {
    /// Product id
    #[arg(long)]
    product: i64,

    /// Units received
    #[arg(long, value_name = "AMOUNT")]
    increase: Option<u64>,

    /// Units issued
    #[arg(long, value_name = "AMOUNT")]
    decrease: Option<u64>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl MoveArgs {
    fn movement(&self) -> Option<StockMovement> {
        match (self.increase, self.decrease) {
            (Some(amount), None) => Some(StockMovement::increase(amount)),
            (None, Some(amount)) => Some(StockMovement::decrease(amount)),
            _ => None,
        }
    }
}

pub(crate) async fn run(args: MoveArgs) -> Result<(), String> {
    let movement = args
        .movement()
        .ok_or_else(|| "exactly one of --increase or --decrease is required".to_string())?;

    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let db = Db::new(pool);
    let service = PgProductsService::new(db.clone());

    let result = service
        .apply_movement(ProductId::from_i64(args.product), movement)
        .await;

    db.close().await;

    let product = result.map_err(|error| match error {
        ProductsServiceError::NotFound => format!("product {} not found", args.product),
        error => format!("stock movement rejected: {error}"),
    })?;

    println!("product: {} ({})", product.name, product.sku);
    println!("quantity: {}", product.quantity);

    if product.needs_reorder() {
        println!(
            "at or below reorder threshold of {}",
            product.reorder_threshold
        );
    }

    Ok(())
}
