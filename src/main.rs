#[tokio::main]
async fn main() {
    venice_community_be::start_server().await;
}
