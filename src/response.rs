//! JSON bodies for successful responses: `{ "data": ... }` for one item,
//! `{ "data": [...], "meta": { "count": n } }` for lists.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct ListBody<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

#[derive(Serialize)]
pub struct ListMeta {
    pub count: usize,
}

pub fn data_body<T: Serialize>(data: T) -> Json<DataBody<T>> {
    Json(DataBody { data })
}

pub fn list_body<T: Serialize>(data: Vec<T>) -> Json<ListBody<T>> {
    let count = data.len();
    Json(ListBody {
        data,
        meta: ListMeta { count },
    })
}
