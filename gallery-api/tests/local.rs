#[cfg(test)]
mod tests {
    use std::{
        convert::Infallible,
        net::SocketAddr,
        sync::{Arc, Mutex},
    };

    use gallery_api::{
        errors::Error,
        responses::{FavoriteModel, ModelPage, ToggleResponse},
        GalleryService, DEFAULT_PAGE_SIZE,
    };

    use gallery_data::{
        filter::{FeedFilter, FeedPeriod, FeedSort},
        model::{CreatorRef, ImageMeta, ModelKind, ModelStatus, ModelSummary, RankSummary},
        viewer::Viewer,
        Cursor,
    };

    use hyper::{
        service::{make_service_fn, service_fn},
        Body, Request, Response, Server,
    };

    use tokio::sync::oneshot;

    use url::Url;

    fn test_model(id: u64, creator: u64, nsfw: bool) -> ModelSummary {
        ModelSummary {
            id,
            name: format!("Model {}", id),
            kind: ModelKind::Checkpoint,
            status: ModelStatus::Published,
            nsfw,
            user: CreatorRef {
                id: creator,
                username: format!("creator_{}", creator),
            },
            image: ImageMeta {
                url: format!("https://gallery.test/img/{}.jpeg", id),
                width: Some(512),
                height: Some(768),
                hash: None,
            },
            rank: RankSummary::default(),
            created_at: 1671580800,
            last_version_at: None,
        }
    }

    fn stub_server<H>(handler: H) -> (Url, oneshot::Sender<()>)
    where
        H: Fn(&Request<Body>) -> Response<Body> + Clone + Send + 'static,
    {
        let service = make_service_fn(move |_| {
            let handler = handler.clone();

            async move {
                Ok::<_, Infallible>(service_fn(move |req| {
                    let handler = handler.clone();

                    async move { Ok::<_, Infallible>(handler(&req)) }
                }))
            }
        });

        let addr = SocketAddr::from(([127, 0, 0, 1], 0));

        let server = Server::bind(&addr).serve(service);

        let local_addr = server.local_addr();

        let (tx, rx) = oneshot::channel::<()>();

        let graceful = server.with_graceful_shutdown(async {
            rx.await.ok();
        });

        tokio::spawn(graceful);

        let url = Url::parse(&format!("http://{}/", local_addr)).expect("Parsing URI");

        (url, tx)
    }

    fn json_response<T: serde::Serialize>(value: &T) -> Response<Body> {
        let body = serde_json::to_string(value).expect("Encoding JSON");

        Response::new(Body::from(body))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn models_page_roundtrip() {
        let queries = Arc::new(Mutex::new(Vec::<String>::new()));

        let seen = queries.clone();
        let (url, shutdown) = stub_server(move |req| {
            seen.lock()
                .unwrap()
                .push(req.uri().query().unwrap_or_default().to_owned());

            let page = ModelPage {
                items: vec![test_model(1, 10, false), test_model(2, 11, true)],
                next_cursor: Some(Cursor::from("page-two")),
            };

            json_response(&page)
        });

        let service = GalleryService::new(url);

        let filter = FeedFilter {
            query: Some("synthwave".to_owned()),
            sort: FeedSort::Newest,
            period: FeedPeriod::Week,
            ..Default::default()
        };

        let page = service
            .models_page(&filter, None, DEFAULT_PAGE_SIZE)
            .await
            .expect("First Page");

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor, Some(Cursor::from("page-two")));
        assert!(page.items[1].nsfw);

        let queries = queries.lock().unwrap();
        let query = &queries[0];

        assert!(query.contains("query=synthwave"));
        assert!(query.contains("sort=Newest"));
        assert!(query.contains("period=Week"));
        assert!(query.contains("limit=100"));
        assert!(!query.contains("cursor"));

        shutdown.send(()).ok();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn cursor_chaining() {
        let (url, shutdown) = stub_server(|req| {
            let query = req.uri().query().unwrap_or_default();

            let page = if query.contains("cursor=page-two") {
                ModelPage {
                    items: vec![test_model(3, 12, false)],
                    next_cursor: None,
                }
            } else {
                ModelPage {
                    items: vec![test_model(1, 10, false), test_model(2, 11, false)],
                    next_cursor: Some(Cursor::from("page-two")),
                }
            };

            json_response(&page)
        });

        let service = GalleryService::new(url);
        let filter = FeedFilter::default();

        let first = service
            .models_page(&filter, None, 2)
            .await
            .expect("First Page");

        assert_eq!(first.items.len(), 2);
        assert!(first.next_cursor.is_some());

        let second = service
            .models_page(&filter, first.next_cursor.as_ref(), 2)
            .await
            .expect("Second Page");

        assert_eq!(second.items[0].id, 3);
        assert!(second.next_cursor.is_none());

        shutdown.send(()).ok();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn remote_error_decode() {
        let (url, shutdown) = stub_server(|_| {
            let body = r#"{"message":"feed temporarily unavailable","code":503}"#;

            Response::builder()
                .status(503)
                .body(Body::from(body))
                .unwrap()
        });

        let service = GalleryService::new(url);

        let result = service
            .models_page(&FeedFilter::default(), None, DEFAULT_PAGE_SIZE)
            .await;

        match result {
            Err(Error::Gallery(e)) => {
                assert_eq!(e.code, 503);
                assert_eq!(e.message, "feed temporarily unavailable");
            }
            other => panic!("Expected gallery error got {:?}", other),
        }

        shutdown.send(()).ok();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn viewer_endpoints_carry_bearer_token() {
        let (url, shutdown) = stub_server(|req| {
            let auth = req
                .headers()
                .get(hyper::header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();

            if auth != "Bearer secret123" {
                let body = r#"{"message":"unauthorized","code":401}"#;

                return Response::builder()
                    .status(401)
                    .body(Body::from(body))
                    .unwrap();
            }

            match req.uri().path() {
                "/creators/hidden" => json_response(&vec![CreatorRef {
                    id: 10,
                    username: "spammer".to_owned(),
                }]),
                "/models/favorites" => json_response(&vec![
                    FavoriteModel { model_id: 1 },
                    FavoriteModel { model_id: 5 },
                ]),
                _ => json_response(&ToggleResponse {
                    id: 10,
                    hidden: true,
                }),
            }
        });

        let service = GalleryService::new(url);
        let viewer = Viewer::with_token("secret123");

        let hidden = service
            .hidden_creators(&viewer)
            .await
            .expect("Hidden Creators");

        assert_eq!(hidden[0].id, 10);

        let favorites = service
            .favorite_models(&viewer)
            .await
            .expect("Favorite Models");

        assert_eq!(favorites, vec![1, 5]);

        let toggle = service.hide_creator(&viewer, 10).await.expect("Hide");
        assert!(toggle.hidden);

        let toggle = service.unhide_creator(&viewer, 10).await.expect("Unhide");
        assert!(toggle.hidden);

        shutdown.send(()).ok();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn anonymous_viewer_rejected_before_any_request() {
        let service = GalleryService::default();

        let result = service.hidden_creators(&Viewer::anonymous()).await;

        assert!(matches!(result, Err(Error::Auth)));
    }
}
