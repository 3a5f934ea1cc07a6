use std::sync::Arc;

use pm_dao::Db;

pub struct ApiGraphqlCtx {
    dao: ApiGraphqlDaoCtx,
}

impl ApiGraphqlCtx {
    pub fn new(dao: ApiGraphqlDaoCtx) -> Self {
        Self { dao }
    }

    pub fn dao(&self) -> &ApiGraphqlDaoCtx {
        &self.dao
    }
}

pub struct ApiGraphqlDaoCtx {
    db: Arc<Db>,
}

impl ApiGraphqlDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn db_shared(&self) -> Arc<Db> {
        self.db.clone()
    }
}
