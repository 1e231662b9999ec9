use super::repo::DeleteResult;
use anyhow::Result;
use care_reminders_domain::ID;
use futures::stream::StreamExt;
use mongodb::{
    bson::{self, doc, Document},
    options::{FindOptions, ReplaceOptions},
    Collection, Cursor,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

/// Mapping between a domain entity and the document it is stored as
pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> Result<E>;
    fn from_domain(entity: &E) -> Self;
    fn get_id_filter(&self) -> Document;
}

pub fn parse_id(raw: String) -> Result<ID> {
    raw.parse::<ID>()
        .map_err(|e| anyhow::anyhow!("Stored document has an invalid id: {}", e))
}

pub fn get_id_filter(id: &str) -> Document {
    doc! {
        "_id": id
    }
}

fn entity_to_persistence<E, D: MongoDocument<E>>(entity: &E) -> Result<Document> {
    let raw = D::from_domain(entity);
    doc_to_persistence::<E, D>(&raw)
}

fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Result<E> {
    let raw: D = bson::from_document(doc)?;
    raw.to_domain()
}

fn doc_to_persistence<E, D: MongoDocument<E>>(raw: &D) -> Result<Document> {
    Ok(bson::to_document(raw)?)
}

pub async fn insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let doc = entity_to_persistence::<E, D>(entity)?;
    collection.insert_one(doc, None).await?;
    Ok(())
}

pub async fn save<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let raw = D::from_domain(entity);
    let filter = raw.get_id_filter();
    let doc = doc_to_persistence::<E, D>(&raw)?;
    collection.replace_one(filter, doc, None).await?;
    Ok(())
}

pub async fn upsert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let raw = D::from_domain(entity);
    let filter = raw.get_id_filter();
    let doc = doc_to_persistence::<E, D>(&raw)?;
    let options = ReplaceOptions::builder().upsert(true).build();
    collection.replace_one(filter, doc, options).await?;
    Ok(())
}

/// Applies a partial update to the document with the given id. Fails
/// if there is no such document.
pub async fn update_one(
    collection: &Collection<Document>,
    id: &str,
    update: Document,
) -> Result<()> {
    let res = collection
        .update_one(get_id_filter(id), doc! { "$set": update }, None)
        .await?;
    if res.matched_count == 0 {
        return Err(anyhow::anyhow!("No document to update: {}", id));
    }
    Ok(())
}

pub async fn find<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &str,
) -> Result<Option<E>> {
    find_one_by::<E, D>(collection, get_id_filter(id)).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Option<E>> {
    match collection.find_one(filter, None).await? {
        Some(doc) => persistence_to_entity::<E, D>(doc).map(Some),
        None => Ok(None),
    }
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
    sort: Option<Document>,
) -> Result<Vec<E>> {
    let options = FindOptions::builder().sort(sort).build();
    let cursor = collection.find(filter, options).await?;
    consume_cursor::<E, D>(cursor).await
}

pub async fn delete<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &str,
) -> Result<Option<E>> {
    match collection
        .find_one_and_delete(get_id_filter(id), None)
        .await?
    {
        Some(doc) => persistence_to_entity::<E, D>(doc).map(Some),
        None => Ok(None),
    }
}

pub async fn delete_many_by(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<DeleteResult> {
    let res = collection.delete_many(filter, None).await?;
    Ok(DeleteResult {
        deleted_count: res.deleted_count,
    })
}

async fn consume_cursor<E, D: MongoDocument<E>>(mut cursor: Cursor<Document>) -> Result<Vec<E>> {
    let mut documents = vec![];
    while let Some(result) = cursor.next().await {
        let doc = result.map_err(|e| {
            error!("Unable to read document from cursor: {:?}", e);
            anyhow::Error::new(e)
        })?;
        documents.push(persistence_to_entity::<E, D>(doc)?);
    }

    Ok(documents)
}
