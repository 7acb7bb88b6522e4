pub mod create_page;
pub mod document_editor;
pub mod kube_client;
pub mod model_catalog;
pub mod namespace;
pub mod navigator;
