use crate::deletion::PendingDeletion;
use crate::form::FormView;
use crate::models::{LeadSummary, LEAD_FIELDS};
use crate::notice::{escape_html, NoticeRegion, NoticeTheme};

pub fn render_form_page(view: &FormView, theme: NoticeTheme) -> String {
    let disabled = if view.control.disabled { " disabled" } else { "" };
    let mut extra_fields = String::new();
    for (name, value) in view.form.fields() {
        if !LEAD_FIELDS.contains(&name.as_str()) {
            extra_fields.push_str(&format!(
                r#"<input type="hidden" name="{}" value="{}" />"#,
                escape_html(name),
                escape_html(value)
            ));
        }
    }

    INDEX_HTML
        .replace("{{HEAD}}", theme_head(theme))
        .replace("{{BASE_STYLE}}", BASE_STYLE)
        .replace("{{ALERT}}", &view.notice.render(theme))
        .replace("{{FULL_NAME}}", &escape_html(view.form.get("full_name")))
        .replace("{{EMAIL}}", &escape_html(view.form.get("email")))
        .replace("{{PHONE}}", &escape_html(view.form.get("phone")))
        .replace("{{INTEREST}}", &escape_html(view.form.get("interest")))
        .replace("{{EXTRA_FIELDS}}", &extra_fields)
        .replace("{{DISABLED}}", disabled)
        .replace("{{BUTTON_LABEL}}", view.control.label)
}

pub fn render_leads_page(
    leads: &[LeadSummary],
    pending: Option<&PendingDeletion>,
    notice: &NoticeRegion,
    theme: NoticeTheme,
) -> String {
    let rows = if leads.is_empty() {
        r#"<tr><td colspan="7" class="empty">No leads registered yet.</td></tr>"#.to_string()
    } else {
        leads.iter().map(render_lead_row).collect::<Vec<_>>().join("\n")
    };

    let modal = pending.map(render_confirm_modal).unwrap_or_default();

    LEADS_HTML
        .replace("{{HEAD}}", theme_head(theme))
        .replace("{{BASE_STYLE}}", BASE_STYLE)
        .replace("{{ALERT}}", &notice.render(theme))
        .replace("{{COUNT}}", &leads.len().to_string())
        .replace("{{ROWS}}", &rows)
        .replace("{{MODAL}}", &modal)
}

fn render_lead_row(lead: &LeadSummary) -> String {
    format!(
        r#"<tr id="lead-{id}">
          <td>{id}</td>
          <td>{name}</td>
          <td>{email}</td>
          <td>{phone}</td>
          <td>{interest}</td>
          <td>{registered}</td>
          <td><a class="btn-delete" href="/leads/{id}/delete"><i class="fas fa-trash"></i> Delete</a></td>
        </tr>"#,
        id = lead.id,
        name = escape_html(&lead.full_name),
        email = escape_html(&lead.email),
        phone = escape_html(&lead.phone),
        interest = escape_html(&lead.interest),
        registered = escape_html(&lead.registered_label()),
    )
}

fn render_confirm_modal(pending: &PendingDeletion) -> String {
    format!(
        r#"<div class="modal-backdrop" role="dialog" aria-modal="true" aria-labelledby="confirm-title">
      <div class="modal">
        <p id="confirm-title">{prompt}</p>
        <form id="confirmDelete" method="post" action="/leads/{id}/delete">
          <button type="submit" class="btn-danger">Delete</button>
          <a class="btn-cancel" href="/leads">Cancel</a>
        </form>
      </div>
    </div>"#,
        prompt = escape_html(pending.prompt),
        id = pending.id,
    )
}

fn theme_head(theme: NoticeTheme) -> &'static str {
    match theme {
        NoticeTheme::Bootstrap => BOOTSTRAP_HEAD,
        NoticeTheme::Tailwind => TAILWIND_HEAD,
    }
}

const BOOTSTRAP_HEAD: &str = r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" />
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" />"#;

const TAILWIND_HEAD: &str = r#"<script src="https://cdn.tailwindcss.com"></script>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" />"#;

const BASE_STYLE: &str = r#"
    :root {
      --ink: #1f2933;
      --muted: #616e7c;
      --accent: #2563eb;
      --danger: #dc2626;
      --card: #ffffff;
      --shadow: 0 18px 48px rgba(31, 41, 51, 0.12);
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #eef2ff, #f8fafc 60%);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 20px;
    }

    nav a {
      color: var(--accent);
      text-decoration: none;
      font-weight: 600;
    }

    label {
      display: grid;
      gap: 6px;
      font-weight: 600;
    }

    input {
      border: 1px solid #cbd2d9;
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 1rem;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button[disabled] {
      opacity: 0.6;
      cursor: progress;
    }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Lead Registration</title>
  {{HEAD}}
  <style>{{BASE_STYLE}}
    #leadForm {
      display: grid;
      gap: 16px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Register a lead</h1>
      <nav><a href="/leads"><i class="fas fa-list"></i> View leads</a></nav>
    </header>

    <div id="alertContainer" tabindex="-1">{{ALERT}}</div>

    <form id="leadForm" method="post" action="/">
      <label for="full_name">Full name
        <input id="full_name" name="full_name" type="text" value="{{FULL_NAME}}" required />
      </label>
      <label for="email">Email
        <input id="email" name="email" type="email" value="{{EMAIL}}" required />
      </label>
      <label for="phone">Phone
        <input id="phone" name="phone" type="tel" value="{{PHONE}}" required />
      </label>
      <label for="interest">Interest
        <input id="interest" name="interest" type="text" value="{{INTEREST}}" required />
      </label>
      {{EXTRA_FIELDS}}
      <button id="submitBtn" type="submit"{{DISABLED}}><span id="btnText">{{BUTTON_LABEL}}</span></button>
    </form>
  </main>

  <script>
    const notice = document.querySelector('#alertContainer [data-scroll]');
    if (notice) {
      notice.scrollIntoView({ behavior: 'smooth', block: 'nearest' });
    }

    document.getElementById('leadForm').addEventListener('submit', () => {
      document.getElementById('submitBtn').disabled = true;
      document.getElementById('btnText').textContent = 'Sending...';
    });
  </script>
</body>
</html>
"#;

const LEADS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Leads</title>
  {{HEAD}}
  <style>{{BASE_STYLE}}
    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 10px 8px;
      border-bottom: 1px solid #e4e7eb;
    }

    .empty {
      text-align: center;
      color: var(--muted);
    }

    .btn-delete {
      color: var(--danger);
      text-decoration: none;
      font-weight: 600;
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(15, 23, 42, 0.45);
      display: grid;
      place-items: center;
    }

    .modal {
      background: white;
      border-radius: 16px;
      padding: 24px;
      width: min(420px, 90%);
      display: grid;
      gap: 16px;
    }

    .btn-danger {
      background: var(--danger);
    }

    .btn-cancel {
      margin-left: 12px;
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Leads ({{COUNT}})</h1>
      <nav><a href="/"><i class="fas fa-plus"></i> Register a lead</a></nav>
    </header>

    <div id="alertContainer" tabindex="-1">{{ALERT}}</div>

    <table id="leadsTable">
      <thead>
        <tr>
          <th>ID</th>
          <th>Name</th>
          <th>Email</th>
          <th>Phone</th>
          <th>Interest</th>
          <th>Registered</th>
          <th></th>
        </tr>
      </thead>
      <tbody>
        {{ROWS}}
      </tbody>
    </table>
  </main>
  {{MODAL}}
</body>
</html>
"#;
