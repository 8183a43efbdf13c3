// Starts a server for one test on an ephemeral port and returns its base URL.
//
// The listener is bound before `run` is spawned, so requests made right away
// queue in the accept backlog instead of racing startup.
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(readiness_server::run(listener));

    format!("http://{addr}")
}
