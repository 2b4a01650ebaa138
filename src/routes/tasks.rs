use crate::{
    auth::AuthUser,
    error::{field_error, AppError},
    models::{Task, TaskInput, TaskPriority, TaskUpdate},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Retrieves all tasks owned by the authenticated user, most recent first.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, user_id, text, priority, completed, created_at
         FROM tasks WHERE user_id = $1
         ORDER BY created_at DESC, id DESC",
    )
    .bind(user.id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task for the authenticated user.
///
/// The task starts with `completed = false` and is owned by the caller; the
/// owner cannot be chosen by the request body.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    payload: web::Json<TaskInput>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    // validate() already vetted the value; this keeps the parse fallible
    // without an unwrap.
    let priority = TaskPriority::parse(&payload.priority).ok_or_else(|| {
        field_error(
            "priority",
            "priority",
            "Priority must be one of: low, medium, high",
        )
    })?;

    let task = sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (user_id, text, priority) VALUES ($1, $2, $3)
         RETURNING id, user_id, text, priority, completed, created_at",
    )
    .bind(user.id)
    .bind(&payload.text)
    .bind(priority)
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(task))
}

/// Sets the completed flag on a task owned by the authenticated user.
///
/// Ownership is part of the UPDATE predicate, so a task belonging to another
/// user is indistinguishable from a missing one: both are 404.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<i32>,
    payload: web::Json<TaskUpdate>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let task = sqlx::query_as::<_, Task>(
        "UPDATE tasks SET completed = $1 WHERE id = $2 AND user_id = $3
         RETURNING id, user_id, text, priority, completed, created_at",
    )
    .bind(payload.completed)
    .bind(task_id.into_inner())
    .bind(user.id)
    .fetch_optional(pool.get_ref())
    .await?;

    match task {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Task not found".into())),
    }
}

/// Deletes a task owned by the authenticated user.
///
/// Same combined ownership predicate as `update_task`: foreign and absent
/// task ids both yield 404.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<i32>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
        .bind(task_id.into_inner())
        .bind(user.id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted"
    })))
}
