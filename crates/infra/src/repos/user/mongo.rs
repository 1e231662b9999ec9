use super::IUserRepo;
use crate::repos::shared::mongo_repo::{self, parse_id, MongoDocument};
use care_reminders_domain::{Role, User, ID};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoUserRepo {
    collection: Collection<Document>,
}

impl MongoUserRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for MongoUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        mongo_repo::insert::<_, UserMongo>(&self.collection, user).await
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        mongo_repo::save::<_, UserMongo>(&self.collection, user).await
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        mongo_repo::find::<_, UserMongo>(&self.collection, user_id.inner_ref()).await
    }

    async fn find_many(&self, user_ids: &[ID]) -> anyhow::Result<Vec<User>> {
        let filter = doc! {
            "_id": {
                "$in": user_ids.iter().map(|id| id.inner_ref()).collect::<Vec<_>>()
            }
        };
        mongo_repo::find_many_by::<_, UserMongo>(&self.collection, filter, None).await
    }

    async fn find_by_role(&self, role: Role) -> anyhow::Result<Vec<User>> {
        let filter = doc! {
            "role": role.as_str(),
        };
        let sort = doc! { "created": -1 };
        mongo_repo::find_many_by::<_, UserMongo>(&self.collection, filter, Some(sort)).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let sort = doc! { "created": -1 };
        mongo_repo::find_many_by::<_, UserMongo>(&self.collection, doc! {}, Some(sort)).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserMongo {
    _id: String,
    role: Role,
    name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    created: i64,
    updated: i64,
}

impl MongoDocument<User> for UserMongo {
    fn to_domain(self) -> anyhow::Result<User> {
        Ok(User {
            id: parse_id(self._id)?,
            role: self.role,
            name: self.name,
            email: self.email,
            phone: self.phone,
            created: self.created,
            updated: self.updated,
        })
    }

    fn from_domain(user: &User) -> Self {
        Self {
            _id: user.id.as_string(),
            role: user.role,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            created: user.created,
            updated: user.updated,
        }
    }

    fn get_id_filter(&self) -> Document {
        mongo_repo::get_id_filter(&self._id)
    }
}
