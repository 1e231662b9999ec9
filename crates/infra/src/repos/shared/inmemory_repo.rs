use super::repo::DeleteResult;
use care_reminders_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Useful functions for creating inmemory repositories

fn lock<T>(collection: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    collection.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = lock(collection);
    collection.push(val.clone());
}

/// Replaces the stored value with the same id, inserts it if there is none
pub fn upsert<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = lock(collection);
    let id = val.id();
    match collection.iter().position(|item| item.id() == id) {
        Some(index) => collection[index] = val.clone(),
        None => collection.push(val.clone()),
    }
}

pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = lock(collection);
    let id = val.id();
    if let Some(item) = collection.iter_mut().find(|item| item.id() == id) {
        *item = val.clone();
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = lock(collection);
    collection.iter().find(|item| item.id() == *val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &Mutex<Vec<T>>, mut compare: F) -> Vec<T> {
    let collection = lock(collection);
    collection
        .iter()
        .filter(|item| compare(item))
        .cloned()
        .collect()
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = lock(collection);
    let index = collection.iter().position(|item| item.id() == *val_id)?;
    Some(collection.remove(index))
}

pub fn delete_by<T: Clone, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> DeleteResult {
    DeleteResult {
        deleted_count: find_and_delete_by(collection, compare).len() as u64,
    }
}

pub fn find_and_delete_by<T: Clone, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> Vec<T> {
    let mut collection = lock(collection);
    let (deleted_items, kept_items): (Vec<T>, Vec<T>) =
        collection.drain(..).partition(|item| compare(item));
    *collection = kept_items;

    deleted_items
}

/// Applies `update` to the value with the given id and returns whether
/// such a value existed
pub fn update<T: Clone + Entity, U: FnOnce(&mut T)>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
    update: U,
) -> bool {
    let mut collection = lock(collection);
    match collection.iter_mut().find(|item| item.id() == *val_id) {
        Some(item) => {
            update(item);
            true
        }
        None => false,
    }
}
