/// Static metadata for a backend-managed collection.
///
/// Every DTO that the dashboard lists implements this so the generic API
/// helpers can build `/api/{collection}[/{id}]` paths and the UI can show
/// consistent names.
pub trait Resource {
    /// Path segment under `/api/` (e.g. "produk")
    fn collection_name() -> &'static str;

    /// Singular name for the UI (e.g. "Produk")
    fn element_name() -> &'static str;

    /// Plural name for the UI (e.g. "Daftar Produk")
    fn list_name() -> &'static str;

    /// Numeric id of this record
    fn id(&self) -> i64;

    /// Collection path, e.g. "/api/produk"
    fn collection_path() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Item path, e.g. "/api/produk/12"
    fn item_path(id: i64) -> String {
        format!("/api/{}/{}", Self::collection_name(), id)
    }
}
