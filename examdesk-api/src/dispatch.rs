//! Named-call dispatch.
//!
//! Method names mirror the UI's channel names one-to-one, camelCase
//! included, so the desktop shell forwards calls without a mapping table.
//! Results are plain JSON rows; an absent record is `null` (or `false`
//! for deletions), never an error.

use crate::context::AppContext;
use crate::error::{InvokeError, InvokeResult};
use examdesk_model::Entity;
use examdesk_services::TodoFilter;
use examdesk_types::EntityId;
use serde_json::Value;
use tracing::debug;

impl AppContext {
    /// Routes one named call with positional JSON arguments.
    pub async fn invoke(&self, method: &str, args: &[Value]) -> InvokeResult<Value> {
        debug!("Dispatching {} with {} args", method, args.len());
        match method {
            // ── Exams ────────────────────────────────────────────
            "getAllExams" => Ok(rows(self.exams().all().await)),
            "getExamById" => match id_arg(method, args, 0)? {
                Some(id) => Ok(row_or_null(self.exams().by_id(&id).await)),
                None => Ok(Value::Null),
            },
            "getExamsByStatus" => {
                let status = str_arg(method, args, 0)?;
                Ok(rows(self.exams().by_status(status).await))
            }
            "createExam" => {
                let fields = object_arg(method, args, 0)?;
                Ok(self.exams().create(fields).await.to_row())
            }
            "updateExam" => {
                let id = id_arg(method, args, 0)?;
                let fields = object_arg(method, args, 1)?;
                match id {
                    Some(id) => Ok(row_or_null(self.exams().update(&id, fields).await)),
                    None => Ok(Value::Null),
                }
            }
            "deleteExam" => match id_arg(method, args, 0)? {
                Some(id) => Ok(Value::Bool(self.exams().delete(&id).await)),
                None => Ok(Value::Bool(false)),
            },

            // ── Knowledge base ───────────────────────────────────
            "getAllKnowledge" => Ok(rows(self.knowledge().all().await)),
            "getKnowledgeById" => match id_arg(method, args, 0)? {
                Some(id) => Ok(row_or_null(self.knowledge().by_id(&id).await)),
                None => Ok(Value::Null),
            },
            "getKnowledgeByCategory" => {
                let category = str_arg(method, args, 0)?;
                Ok(rows(self.knowledge().by_category(category).await))
            }
            "searchKnowledge" => {
                let query = str_arg(method, args, 0)?;
                Ok(rows(self.knowledge().search(query).await))
            }

            // ── Chat ─────────────────────────────────────────────
            "getChatHistory" => Ok(rows(self.chat().history().await)),
            "getQuickQuestions" => Ok(serde_json::to_value(self.chat().quick_questions())?),
            "sendMessage" => {
                let content = str_arg(method, args, 0)?;
                Ok(self.chat().send_message(content).await.to_row())
            }
            "clearChatHistory" => Ok(self.chat().clear().await.to_row()),

            // ── Schedule ─────────────────────────────────────────
            "getAllSchedules" => Ok(rows(self.schedules().all().await)),
            "getSchedulesByDate" => {
                let date = str_arg(method, args, 0)?;
                Ok(rows(self.schedules().by_date(date).await))
            }
            "getSchedulesByMonth" => {
                let year = int_arg(method, args, 0)?;
                let year = i32::try_from(year).map_err(|_| invalid(method, 0, "a year number"))?;
                let month = int_arg(method, args, 1)?;
                let month =
                    u32::try_from(month).map_err(|_| invalid(method, 1, "a month number"))?;
                Ok(rows(self.schedules().by_month(year, month).await))
            }
            "createSchedule" => {
                let fields = object_arg(method, args, 0)?;
                Ok(self.schedules().create(fields).await.to_row())
            }
            "updateSchedule" => {
                let id = id_arg(method, args, 0)?;
                let fields = object_arg(method, args, 1)?;
                match id {
                    Some(id) => Ok(row_or_null(self.schedules().update(&id, fields).await)),
                    None => Ok(Value::Null),
                }
            }
            "deleteSchedule" => match id_arg(method, args, 0)? {
                Some(id) => Ok(Value::Bool(self.schedules().delete(&id).await)),
                None => Ok(Value::Bool(false)),
            },

            // ── Todos ────────────────────────────────────────────
            "getAllTodos" => Ok(rows(self.todos().all().await)),
            "getTodoById" => match id_arg(method, args, 0)? {
                Some(id) => Ok(row_or_null(self.todos().by_id(&id).await)),
                None => Ok(Value::Null),
            },
            "getTodosByFilter" => {
                let name = str_arg(method, args, 0)?;
                let filter = TodoFilter::parse(name)
                    .ok_or_else(|| invalid(method, 0, "one of all, active or completed"))?;
                Ok(rows(self.todos().by_filter(filter).await))
            }
            "createTodo" => {
                let fields = object_arg(method, args, 0)?;
                Ok(self.todos().create(fields).await.to_row())
            }
            "updateTodo" => {
                let id = id_arg(method, args, 0)?;
                let fields = object_arg(method, args, 1)?;
                match id {
                    Some(id) => Ok(row_or_null(self.todos().update(&id, fields).await)),
                    None => Ok(Value::Null),
                }
            }
            "toggleTodo" => match id_arg(method, args, 0)? {
                Some(id) => Ok(row_or_null(self.todos().toggle(&id).await)),
                None => Ok(Value::Null),
            },
            "deleteTodo" => match id_arg(method, args, 0)? {
                Some(id) => Ok(Value::Bool(self.todos().delete(&id).await)),
                None => Ok(Value::Bool(false)),
            },
            "getTodoStatistics" => Ok(serde_json::to_value(self.todos().statistics().await)?),

            // ── Profile ──────────────────────────────────────────
            "getProfile" => Ok(row_or_null(self.profile().get().await)),
            "updateProfile" => {
                let fields = object_arg(method, args, 0)?;
                Ok(row_or_null(self.profile().update(fields).await))
            }
            "updateAvatar" => {
                let avatar = str_arg(method, args, 0)?;
                Ok(row_or_null(self.profile().update_avatar(avatar).await))
            }
            "getUserStatistics" => Ok(serde_json::to_value(self.profile().statistics())?),

            _ => Err(InvokeError::UnknownMethod(method.to_owned())),
        }
    }
}

// ── Argument and result helpers ──────────────────────────────────

fn rows(entities: Vec<Entity>) -> Value {
    Value::Array(entities.iter().map(Entity::to_row).collect())
}

fn row_or_null(entity: Option<Entity>) -> Value {
    entity.map(|e| e.to_row()).unwrap_or(Value::Null)
}

fn invalid(method: &str, index: usize, expected: &'static str) -> InvokeError {
    InvokeError::InvalidArgument {
        method: method.to_owned(),
        index,
        expected,
    }
}

fn arg<'a>(method: &str, args: &'a [Value], index: usize) -> InvokeResult<&'a Value> {
    args.get(index).ok_or_else(|| InvokeError::MissingArgument {
        method: method.to_owned(),
        index,
    })
}

fn str_arg<'a>(method: &str, args: &'a [Value], index: usize) -> InvokeResult<&'a str> {
    arg(method, args, index)?
        .as_str()
        .ok_or_else(|| invalid(method, index, "a string"))
}

fn int_arg(method: &str, args: &[Value], index: usize) -> InvokeResult<i64> {
    arg(method, args, index)?
        .as_i64()
        .ok_or_else(|| invalid(method, index, "an integer"))
}

fn object_arg(method: &str, args: &[Value], index: usize) -> InvokeResult<Value> {
    let value = arg(method, args, index)?;
    if value.is_object() {
        Ok(value.clone())
    } else {
        Err(invalid(method, index, "an object"))
    }
}

/// Ids arrive as strings. A non-string is a caller mistake; a string that
/// does not parse as an id simply refers to nothing, which surfaces as an
/// absent record rather than an error.
fn id_arg(method: &str, args: &[Value], index: usize) -> InvokeResult<Option<EntityId>> {
    let raw = str_arg(method, args, index)?;
    Ok(EntityId::parse(raw).ok())
}
