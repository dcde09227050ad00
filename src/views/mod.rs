//! HTML pages for the sticky notes UI.
//!
//! Every piece of user-supplied text goes through [`escape`] before it is
//! placed in markup.

use crate::{
    form::{FormErrors, NoteForm},
    models::Note,
};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} | Sticky Notes</title>
</head>
<body>
  <header><a href="/notes/">Sticky Notes</a></header>
  <main>
{body}
  </main>
</body>
</html>"#,
        title = escape(title)
    )
}

pub fn note_list(notes: &[Note]) -> String {
    let mut body = String::from("    <h1>Notes</h1>\n    <p><a href=\"/notes/new/\">New note</a></p>\n");

    if notes.is_empty() {
        body.push_str("    <p>No notes yet.</p>\n");
    } else {
        body.push_str("    <ul>\n");
        for note in notes {
            body.push_str(&format!(
                "      <li>#{id} <a href=\"/notes/{id}/\">{title}</a></li>\n",
                id = note.id,
                title = escape(&note.title)
            ));
        }
        body.push_str("    </ul>\n");
    }

    layout("Notes", &body)
}

pub fn note_detail(note: &Note) -> String {
    let body = format!(
        r#"    <h1>{title}</h1>
    <div class="content">{content}</div>
    <p>
      <a href="/notes/{id}/edit/">Edit</a>
      <a href="/notes/{id}/delete/">Delete</a>
      <a href="/notes/">Back to list</a>
    </p>
"#,
        id = note.id,
        title = escape(&note.title),
        content = escape(&note.content)
    );

    layout(&note.title, &body)
}

/// Shared create/update form.
pub struct FormPage<'a> {
    pub heading: &'a str,
    pub action: &'a str,
    pub cancel_url: &'a str,
    pub form: &'a NoteForm,
    pub errors: &'a FormErrors,
}

fn error_list(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let mut out = String::from("      <ul class=\"errorlist\">\n");
    for message in messages {
        out.push_str(&format!("        <li>{}</li>\n", escape(message)));
    }
    out.push_str("      </ul>\n");
    out
}

pub fn note_form(page: &FormPage<'_>) -> String {
    let body = format!(
        r#"    <h1>{heading}</h1>
    <form method="post" action="{action}">
      <p>
        <label for="id_title">Title:</label>
        <input type="text" name="title" id="id_title" maxlength="255" value="{title}" required>
      </p>
{title_errors}      <p>
        <label for="id_content">Content:</label>
        <textarea name="content" id="id_content" required>{content}</textarea>
      </p>
{content_errors}      <button type="submit">Save</button>
      <a href="{cancel_url}">Cancel</a>
    </form>
"#,
        heading = escape(page.heading),
        action = escape(page.action),
        cancel_url = escape(page.cancel_url),
        title = escape(&page.form.title),
        content = escape(&page.form.content),
        title_errors = error_list(&page.errors.title),
        content_errors = error_list(&page.errors.content),
    );

    layout(page.heading, &body)
}

pub fn note_confirm_delete(note: &Note) -> String {
    let body = format!(
        r#"    <h1>Delete note</h1>
    <p>Are you sure you want to delete "{title}"?</p>
    <form method="post" action="/notes/{id}/delete/">
      <button type="submit">Yes, delete</button>
      <a href="/notes/{id}/">Cancel</a>
    </form>
"#,
        id = note.id,
        title = escape(&note.title)
    );

    layout("Delete note", &body)
}

pub fn not_found() -> String {
    layout(
        "Not found",
        "    <h1>Not found</h1>\n    <p>The requested note does not exist.</p>\n",
    )
}

pub fn internal_error(message: &str) -> String {
    let body = format!("    <h1>Server error</h1>\n    <p>{}</p>\n", escape(message));
    layout("Server error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, title: &str, content: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn list_shows_titles_but_not_content() {
        let html = note_list(&[note(1, "First", "secret body"), note(2, "Second", "x")]);

        assert!(html.contains(r#"<a href="/notes/1/">First</a>"#));
        assert!(html.contains(r#"<a href="/notes/2/">Second</a>"#));
        assert!(!html.contains("secret body"));
    }

    #[test]
    fn detail_escapes_user_text() {
        let html = note_detail(&note(3, "<script>", "a & b"));

        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn form_renders_errors_per_field() {
        let form = NoteForm::new("", "kept input");
        let errors = FormErrors {
            title: vec!["This field is required.".to_string()],
            content: Vec::new(),
        };
        let html = note_form(&FormPage {
            heading: "New note",
            action: "/notes/new/",
            cancel_url: "/notes/",
            form: &form,
            errors: &errors,
        });

        assert_eq!(html.matches("This field is required.").count(), 1);
        assert!(html.contains(">kept input</textarea>"));
        assert!(html.contains(r#"action="/notes/new/""#));
    }

    #[test]
    fn confirm_delete_asks_for_confirmation() {
        let html = note_confirm_delete(&note(5, "Doomed", "body"));

        assert!(html.contains(r#"Are you sure you want to delete "Doomed"?"#));
        assert!(html.contains(r#"action="/notes/5/delete/""#));
    }
}
