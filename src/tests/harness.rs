use std::{fs, path::PathBuf, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::Response,
    Router,
};
use tower::util::ServiceExt;

use crate::{
    handlers::{Consts, Ctx},
    http::init_handlers,
    index::{IndexHandle, IndexOptions},
    loader,
    models::DataConfig,
};

pub(super) const ADMIN_USER: &str = "admin";
pub(super) const ADMIN_PASS: &str = "secret";

pub(super) struct TestHarness {
    _temp: tempfile::TempDir,
    pub(super) data_path: PathBuf,
    pub(super) ctx: Arc<Ctx>,
    pub(super) router: Router,
}

impl TestHarness {
    pub(super) fn setup(admin_password: &str) -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let data_path = temp.path().join("data.csv");
        fs::write(&data_path, "car_wheel,10\nwheel_house,20\nhouse,5\n").expect("seed data");

        let data = DataConfig::default();
        let index =
            loader::load_index(&data_path, &data, IndexOptions::default()).expect("load index");

        let ctx = Arc::new(Ctx {
            index: IndexHandle::new(index),
            data_path: data_path.clone(),
            data,
            consts: Consts {
                admin_username: ADMIN_USER.to_string(),
                admin_password: admin_password.to_string(),
                version: "test".to_string(),
            },
        });
        let router = init_handlers(ctx.clone());

        Self {
            _temp: temp,
            data_path,
            ctx,
            router,
        }
    }

    pub(super) async fn send(&self, req: Request<Body>) -> Response {
        self.router.clone().oneshot(req).await.expect("response")
    }

    pub(super) async fn get(&self, uri: &str) -> Response {
        self.send(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
    }
}

pub(super) async fn body_json(resp: Response) -> serde_json::Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json body")
}
