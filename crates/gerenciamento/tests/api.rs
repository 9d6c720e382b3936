// Testes de integração do Gerenciamento: o router real sobre um SQLite em
// memória, dirigido com `tower::ServiceExt::oneshot`.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use gerenciamento::{AppState, MIGRATOR, app};

async fn test_app() -> Router {
    // Uma conexão só: cada teste enxerga o mesmo banco em memória.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("falha ao abrir o banco em memória");

    MIGRATOR.run(&pool).await.expect("falha ao migrar");

    app(AppState::from_pool(pool))
}

async fn request(
    app: &Router,
    metodo: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(metodo)
        .uri(uri)
        .header("content-type", "application/json");

    let request = match body {
        Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resposta = app.clone().oneshot(request).await.unwrap();
    let status = resposta.status();
    let bytes = resposta.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

async fn criar_professor(app: &Router, nome: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/professores",
        Some(json!({ "nome": nome, "materia": "Matemática" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn criar_turma(app: &Router, professor_id: i64) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/turmas",
        Some(json!({ "descricao": "Turma A", "professor_id": professor_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn criar_turma_com_professor_existente() {
    let app = test_app().await;
    let professor_id = criar_professor(&app, "Carlos Pereira").await;

    let (status, body) = request(
        &app,
        "POST",
        "/turmas",
        Some(json!({ "descricao": "Turma A", "professor_id": professor_id })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["descricao"], "Turma A");
    assert_eq!(body["professor_id"], professor_id);
    assert_eq!(body["ativo"], true);
}

#[tokio::test]
async fn criar_turma_com_professor_inexistente_nao_persiste_nada() {
    let app = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/turmas",
        Some(json!({ "descricao": "Turma A", "professor_id": 999 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "Professor não encontrado" }));

    let (status, lista) = request(&app, "GET", "/turmas", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lista, json!([]));
}

#[tokio::test]
async fn criar_professor_sem_nome_devolve_400() {
    let app = test_app().await;

    let (status, body) = request(&app, "POST", "/professores", Some(json!({ "idade": 40 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].is_string());
    assert!(body["detalhes"]["nome"].is_array());
}

#[tokio::test]
async fn get_por_id_devolve_o_registro_criado() {
    let app = test_app().await;

    let (_, criado) = request(
        &app,
        "POST",
        "/professores",
        Some(json!({
            "nome": "Ana Souza",
            "idade": 38,
            "materia": "História",
            "observacoes": "Coordenadora do turno da manhã"
        })),
    )
    .await;

    let id = criado["id"].as_i64().unwrap();
    let (status, lido) = request(&app, "GET", &format!("/professores/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lido, criado);
}

#[tokio::test]
async fn get_por_id_inexistente_devolve_404() {
    let app = test_app().await;

    let (status, body) = request(&app, "GET", "/professores/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "Professor não encontrado" }));
}

#[tokio::test]
async fn atualizacao_parcial_mantem_campos_ausentes() {
    let app = test_app().await;
    let id = criar_professor(&app, "Carlos Pereira").await;

    let (status, atualizado) = request(
        &app,
        "PUT",
        &format!("/professores/{id}"),
        Some(json!({ "idade": 50 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(atualizado["nome"], "Carlos Pereira");
    assert_eq!(atualizado["materia"], "Matemática");
    assert_eq!(atualizado["idade"], 50);
}

#[tokio::test]
async fn atualizar_turma_com_professor_invalido_nao_altera_a_turma() {
    let app = test_app().await;
    let professor_id = criar_professor(&app, "Carlos Pereira").await;
    let turma_id = criar_turma(&app, professor_id).await;

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/turmas/{turma_id}"),
        Some(json!({ "descricao": "Turma B", "professor_id": 999 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "Professor não encontrado" }));

    let (_, turma) = request(&app, "GET", &format!("/turmas/{turma_id}"), None).await;
    assert_eq!(turma["descricao"], "Turma A");
    assert_eq!(turma["professor_id"], professor_id);
}

#[tokio::test]
async fn media_final_calculada_na_criacao() {
    let app = test_app().await;
    let professor_id = criar_professor(&app, "Carlos Pereira").await;
    let turma_id = criar_turma(&app, professor_id).await;

    let (status, aluno) = request(
        &app,
        "POST",
        "/alunos",
        Some(json!({
            "nome": "João da Silva",
            "turma_id": turma_id,
            "nota_semestre1": 8.5,
            "nota_semestre2": 9.0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(aluno["media_final"], 8.75);
}

#[tokio::test]
async fn media_final_fica_vazia_com_uma_nota_so() {
    let app = test_app().await;
    let professor_id = criar_professor(&app, "Carlos Pereira").await;
    let turma_id = criar_turma(&app, professor_id).await;

    let (status, aluno) = request(
        &app,
        "POST",
        "/alunos",
        Some(json!({
            "nome": "Maria",
            "turma_id": turma_id,
            "nota_semestre1": 8.5
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(aluno["media_final"], Value::Null);
}

#[tokio::test]
async fn media_final_recalculada_quando_uma_nota_chega_depois() {
    let app = test_app().await;
    let professor_id = criar_professor(&app, "Carlos Pereira").await;
    let turma_id = criar_turma(&app, professor_id).await;

    let (_, aluno) = request(
        &app,
        "POST",
        "/alunos",
        Some(json!({
            "nome": "Maria",
            "turma_id": turma_id,
            "nota_semestre1": 8.5
        })),
    )
    .await;
    let id = aluno["id"].as_i64().unwrap();

    // Atualização que não mexe em nota deixa a média como está.
    let (_, depois_do_nome) = request(
        &app,
        "PUT",
        &format!("/alunos/{id}"),
        Some(json!({ "nome": "Maria Clara" })),
    )
    .await;
    assert_eq!(depois_do_nome["media_final"], Value::Null);

    let (status, atualizado) = request(
        &app,
        "PUT",
        &format!("/alunos/{id}"),
        Some(json!({ "nota_semestre2": 9.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(atualizado["nota_semestre1"], 8.5);
    assert_eq!(atualizado["nota_semestre2"], 9.0);
    assert_eq!(atualizado["media_final"], 8.75);
}

#[tokio::test]
async fn data_de_nascimento_e_devolvida_em_formato_iso() {
    let app = test_app().await;
    let professor_id = criar_professor(&app, "Carlos Pereira").await;
    let turma_id = criar_turma(&app, professor_id).await;

    let (status, aluno) = request(
        &app,
        "POST",
        "/alunos",
        Some(json!({
            "nome": "Pedro",
            "turma_id": turma_id,
            "data_nascimento": "2008-03-21"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(aluno["data_nascimento"], "2008-03-21");
}

#[tokio::test]
async fn deletar_professor_remove_turmas_e_alunos() {
    let app = test_app().await;
    let professor_id = criar_professor(&app, "Carlos Pereira").await;
    let turma_id = criar_turma(&app, professor_id).await;

    let (_, aluno) = request(
        &app,
        "POST",
        "/alunos",
        Some(json!({ "nome": "João", "turma_id": turma_id })),
    )
    .await;
    let aluno_id = aluno["id"].as_i64().unwrap();

    let (status, body) =
        request(&app, "DELETE", &format!("/professores/{professor_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["mensagem"].is_string());

    let (status, _) = request(&app, "GET", &format!("/turmas/{turma_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(&app, "GET", &format!("/alunos/{aluno_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deletar_turma_remove_os_alunos_dela() {
    let app = test_app().await;
    let professor_id = criar_professor(&app, "Carlos Pereira").await;
    let turma_id = criar_turma(&app, professor_id).await;

    let (_, aluno) = request(
        &app,
        "POST",
        "/alunos",
        Some(json!({ "nome": "João", "turma_id": turma_id })),
    )
    .await;
    let aluno_id = aluno["id"].as_i64().unwrap();

    let (status, _) = request(&app, "DELETE", &format!("/turmas/{turma_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, "GET", &format!("/alunos/{aluno_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // O professor continua existindo.
    let (status, _) = request(&app, "GET", &format!("/professores/{professor_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deletar_inexistente_devolve_404() {
    let app = test_app().await;

    let (status, body) = request(&app, "DELETE", "/turmas/7", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "Turma não encontrada" }));
}
