//! In-memory stand-in for the Postgres gateway used by handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::application::ports::sql_gateway::{GatewayError, Row, RowSet, SqlGateway, SqlParam};
use crate::application::use_cases::users::create_user::CREATE_USER_SQL;
use crate::application::use_cases::users::delete_user::DELETE_USER_SQL;
use crate::application::use_cases::users::get_user::GET_USER_SQL;
use crate::application::use_cases::users::list_users::LIST_USERS_SQL;
use crate::application::use_cases::users::update_user::UPDATE_USER_SQL;
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::domain::users::user::User;

#[derive(Default)]
struct Table {
    users: Vec<User>,
    next_id: i64,
    calls: usize,
    fail: bool,
}

/// Interprets the statements the user use cases issue against a `Vec<User>`.
#[derive(Default)]
pub struct InMemoryGateway {
    table: Mutex<Table>,
}

impl InMemoryGateway {
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            table: Mutex::new(Table {
                users,
                next_id,
                ..Table::default()
            }),
        }
    }

    /// Every call fails as if the store were unreachable.
    pub fn failing() -> Self {
        let gateway = Self::default();
        gateway.table.lock().unwrap().fail = true;
        gateway
    }

    pub fn calls(&self) -> usize {
        self.table.lock().unwrap().calls
    }

    pub fn users(&self) -> Vec<User> {
        self.table.lock().unwrap().users.clone()
    }
}

pub fn user(id: i64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

pub fn test_context(gateway: Arc<dyn SqlGateway>) -> AppContext {
    let cfg = Config::from_lookup(|_| None).unwrap();
    AppContext::new(cfg, gateway)
}

fn row_of(user: &User) -> Row {
    match serde_json::to_value(user).unwrap() {
        Value::Object(map) => map,
        other => panic!("user serialized to {other}"),
    }
}

fn int_param(params: &[SqlParam], idx: usize) -> i64 {
    match &params[idx] {
        SqlParam::Int(v) => *v,
        other => panic!("expected integer param at {idx}, got {other:?}"),
    }
}

fn text_param(params: &[SqlParam], idx: usize) -> String {
    match &params[idx] {
        SqlParam::Text(v) => v.clone(),
        other => panic!("expected text param at {idx}, got {other:?}"),
    }
}

#[async_trait]
impl SqlGateway for InMemoryGateway {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<RowSet, GatewayError> {
        let mut table = self.table.lock().unwrap();
        table.calls += 1;
        if table.fail {
            return Err(GatewayError::Store(sqlx::Error::PoolTimedOut));
        }

        let rows = match sql {
            "SELECT 1" => {
                let Value::Object(row) = json!({ "?column?": 1 }) else {
                    unreachable!()
                };
                vec![row]
            }
            LIST_USERS_SQL => table.users.iter().map(row_of).collect(),
            GET_USER_SQL => {
                let id = int_param(params, 0);
                table.users.iter().filter(|u| u.id == id).map(row_of).collect()
            }
            CREATE_USER_SQL => {
                let id = table.next_id.max(1);
                table.next_id = id + 1;
                let created = user(id, &text_param(params, 0), &text_param(params, 1));
                let row = row_of(&created);
                table.users.push(created);
                vec![row]
            }
            UPDATE_USER_SQL => {
                let id = int_param(params, 2);
                let (name, email) = (text_param(params, 0), text_param(params, 1));
                table
                    .users
                    .iter_mut()
                    .filter(|u| u.id == id)
                    .map(|u| {
                        u.name = name.clone();
                        u.email = email.clone();
                        row_of(u)
                    })
                    .collect()
            }
            DELETE_USER_SQL => {
                let id = int_param(params, 0);
                let (gone, kept): (Vec<User>, Vec<User>) =
                    table.users.drain(..).partition(|u| u.id == id);
                table.users = kept;
                gone.iter().map(row_of).collect()
            }
            other => panic!("unexpected statement: {other}"),
        };
        Ok(rows)
    }
}
