//! In-process stand-in for the Groupie Trackers API used by unit tests.

use std::net::SocketAddr;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::models::Artist;

#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Fixture,
    Fail,
    Garbage,
}

#[derive(Debug, Clone, Copy)]
pub struct Upstream {
    pub artists: Reply,
    pub locations: Reply,
    pub dates: Reply,
    pub relations: Reply,
}

impl Upstream {
    pub fn healthy() -> Self {
        Self::uniform(Reply::Fixture)
    }

    pub fn down() -> Self {
        Self::uniform(Reply::Fail)
    }

    pub fn garbled() -> Self {
        Self::uniform(Reply::Garbage)
    }

    /// Artists answer, every auxiliary collection fails.
    pub fn artists_only() -> Self {
        Self {
            artists: Reply::Fixture,
            ..Self::down()
        }
    }

    fn uniform(reply: Reply) -> Self {
        Self {
            artists: reply,
            locations: reply,
            dates: reply,
            relations: reply,
        }
    }
}

pub struct MockUpstream {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl MockUpstream {
    pub async fn spawn(upstream: Upstream) -> Self {
        let app = Router::new()
            .route("/api/artists", get(move || reply(upstream.artists, artists_json())))
            .route(
                "/api/locations",
                get(move || reply(upstream.locations, locations_json())),
            )
            .route("/api/dates", get(move || reply(upstream.dates, dates_json())))
            .route(
                "/api/relation",
                get(move || reply(upstream.relations, relations_json())),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, task }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn reply(kind: Reply, fixture: Value) -> Response {
    match kind {
        Reply::Fixture => axum::Json(fixture).into_response(),
        Reply::Fail => (StatusCode::INTERNAL_SERVER_ERROR, "upstream unavailable").into_response(),
        Reply::Garbage => (StatusCode::OK, "{\"index\": [ not json").into_response(),
    }
}

pub fn sample_artists() -> Vec<Artist> {
    serde_json::from_value(artists_json()).unwrap()
}

fn artists_json() -> Value {
    json!([
        {
            "id": 1,
            "image": "https://groupietrackers.herokuapp.com/api/images/queen.jpeg",
            "name": "Queen",
            "members": [
                "Freddie Mercury",
                "Brian May",
                "John Daecon",
                "Roger Meddows-Taylor",
                "Mike Grose",
                "Barry Mitchell"
            ],
            "creationDate": 1970,
            "firstAlbum": "14-12-1973",
            "locations": "https://groupietrackers.herokuapp.com/api/locations/1",
            "concertDates": "https://groupietrackers.herokuapp.com/api/dates/1",
            "relations": "https://groupietrackers.herokuapp.com/api/relation/1"
        },
        {
            "id": 2,
            "image": "https://groupietrackers.herokuapp.com/api/images/bobbymcferrin.jpeg",
            "name": "Bobby McFerrin",
            "members": ["Bobby McFerrin"],
            "creationDate": 1977,
            "firstAlbum": "01-01-1982"
        },
        {
            "id": 3,
            "image": "https://groupietrackers.herokuapp.com/api/images/abba.jpeg",
            "name": "ABBA",
            "members": [
                "Agnetha Fältskog",
                "Björn Ulvaeus",
                "Benny Andersson",
                "Anni-Frid Lyngstad"
            ],
            "creationDate": 1972,
            "firstAlbum": "26-02-1973"
        },
        {
            "id": 4,
            "image": "https://groupietrackers.herokuapp.com/api/images/blacksabbath.jpeg",
            "name": "Black Sabbath",
            "members": ["Ozzy Osbourne", "Tony Iommi", "Geezer Butler", "Bill Ward"],
            "creationDate": 1968,
            "firstAlbum": "13-02-1970"
        }
    ])
}

fn locations_json() -> Value {
    json!({
        "index": [
            {"id": 1, "locations": ["north_carolina-usa", "osaka-japan"]},
            {"id": 2, "locations": ["new_york-usa"]},
            {"id": 3, "locations": ["stockholm-sweden", "london-uk"]}
        ]
    })
}

fn dates_json() -> Value {
    json!({
        "index": [
            {"id": 1, "dates": ["*23-08-2019", "05-12-2019"]},
            {"id": 2, "dates": ["*10-10-2020"]},
            {"id": 3, "dates": ["*01-04-1974", "02-04-1974"]}
        ]
    })
}

fn relations_json() -> Value {
    json!({
        "index": [
            {"id": 1, "datesLocations": {
                "05-12-2019": "osaka-japan",
                "23-08-2019": "north_carolina-usa"
            }},
            {"id": 3, "datesLocations": {
                "01-04-1974": ["stockholm-sweden"],
                "02-04-1974": ["london-uk"]
            }}
        ]
    })
}
