//! Templates loaded from a directory on disk.

mod common;

use assert_matches::assert_matches;
use common::{body_text, test_config, TestApp};
use postboard_api::templates::{Templates, ARTICLE_FILE, EDITOR_FILE, HOME_FILE};

const SECRET: &str = "P@ssW0rd!";

fn write_templates(dir: &std::path::Path) {
    std::fs::write(dir.join(HOME_FILE), "<ul>!articles!</ul>").unwrap();
    std::fs::write(dir.join(ARTICLE_FILE), "<li>!title!|!content!|!time!</li>").unwrap();
    std::fs::write(dir.join(EDITOR_FILE), "<form>editor</form>").unwrap();
}

#[tokio::test]
async fn load_dir_reads_all_three_files() {
    let dir = tempfile::tempdir().unwrap();
    write_templates(dir.path());

    let templates = Templates::load(Some(dir.path())).await.unwrap();

    assert_eq!(templates.home, "<ul>!articles!</ul>");
    assert_eq!(templates.article, "<li>!title!|!content!|!time!</li>");
    assert_eq!(templates.editor, "<form>editor</form>");
}

#[tokio::test]
async fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(HOME_FILE), "!articles!").unwrap();

    let err = Templates::load_dir(dir.path()).await.unwrap_err();

    assert_eq!(err.path, dir.path().join(ARTICLE_FILE));
    assert_matches!(err.source.kind(), std::io::ErrorKind::NotFound);
}

#[tokio::test]
async fn home_page_is_exact_substitution() {
    let dir = tempfile::tempdir().unwrap();
    write_templates(dir.path());
    let templates = Templates::load_dir(dir.path()).await.unwrap();
    let app = TestApp::with(test_config(), templates);

    app.submit(&[("pass", SECRET), ("content", "a"), ("title", "A")])
        .await;
    app.submit(&[("pass", SECRET), ("content", "b"), ("title", "B")])
        .await;

    let posts = app.posts().await.unwrap();
    let expected = format!(
        "<ul><li>B|b|{}</li><li>A|a|{}</li></ul>",
        posts.posts[0].submitted_at, posts.posts[1].submitted_at
    );

    assert_eq!(body_text(app.get("/").await).await, expected);
    assert_eq!(body_text(app.get("/editor").await).await, "<form>editor</form>");
}
