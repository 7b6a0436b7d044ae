use portfolio::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    portfolio::start_server().await
}
