pub(super) async fn healthz() -> &'static str {
    "ok"
}
