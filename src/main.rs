use yt8m::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    yt8m::app::run().await
}
