use maud::{html, Markup, PreEscaped, DOCTYPE};

// Kept inline so the server has no static-file route to serve.
const STYLE: &str = r#"
body {
  font-family: system-ui, sans-serif;
  margin: 0;
  color: #222;
}
header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1.5rem;
  box-shadow: 0 1px 4px rgba(0,0,0,0.15);
}
header h1 { font-size: 1.3rem; margin: 0; }
.wrap {
  display: flex;
  gap: 2rem;
  padding: 1.5rem;
  align-items: flex-start;
}
aside {
  width: 320px;
  flex-shrink: 0;
  background: #f7f7f7;
  border-radius: 8px;
  padding: 1rem;
}
aside h2 { font-size: 1.1rem; margin-top: 0; }
aside h3 { font-size: 1rem; }
.field { margin-bottom: 0.75rem; }
.field label { display: block; font-size: 0.85rem; margin-bottom: 0.25rem; }
.field input, .field select { width: 100%; box-sizing: border-box; padding: 4px 6px; }
.range { display: flex; align-items: center; gap: 0.4rem; }
.range input { width: 45%; }
button {
  padding: 6px 16px;
  cursor: pointer;
  border: none;
  border-radius: 4px;
  background: #524ed2;
  color: white;
}
main { flex: 1; min-width: 0; }
.card {
  background: #fff;
  border: 1px solid #e2e2e2;
  border-radius: 8px;
  padding: 0.75rem 1rem;
  margin-bottom: 0.75rem;
}
.card h2 { font-size: 1rem; margin: 0 0 0.5rem 0; }
.error {
  background: #fde8e8;
  color: #b91c1c;
  border-radius: 6px;
  padding: 0.75rem 1rem;
  margin-bottom: 1rem;
}
.muted { color: #666; font-size: 0.85rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 6px 8px; font-size: 0.9rem; text-align: left; }
th { background: #f0f0f0; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h1 { "おのぼりホームズ" }
                }
                (content)
            }
        }
    }
}
