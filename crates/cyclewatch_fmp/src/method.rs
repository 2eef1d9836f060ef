use serde::Serialize;

pub trait Method {
    const PATH: &'static str;

    type Response: serde::de::DeserializeOwned;
    type Params: Serialize;

    /// Full request URL for one call. Endpoints that carry a path segment
    /// (e.g. a symbol) override this.
    fn url(_params: &Self::Params) -> String {
        Self::PATH.to_string()
    }
}
