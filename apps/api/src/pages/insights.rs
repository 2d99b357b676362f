//! Light, professional theme. Served at `/insights`.

use super::Theme;

pub const INSIGHTS: Theme = Theme {
    key: "insights",
    route: "/insights",
    accent: "#3498db",
    stylesheet: STYLESHEET,
};

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #eef2f5; color: #2c3e50; }
.main-container {
  max-width: 800px;
  margin: 2rem auto;
  padding: 2rem;
  border-radius: 12px;
  background: white;
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.12);
}
.header { text-align: center; margin-bottom: 2rem; padding-bottom: 1rem; border-bottom: 1px solid #e0e0e0; }
.header h1 { color: #2c3e50; font-size: 2.2rem; margin-bottom: 0.5rem; }
.header p { color: #7f8c8d; font-size: 1rem; }
.form-container { padding: 1.5rem; background: #f9f9f9; border-radius: 10px; }
.form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
label { display: block; margin-bottom: 1rem; }
input, select { width: 100%; box-sizing: border-box; padding: 0.4rem; border: 1px solid #ccd6dd; border-radius: 4px; }
button, .download-btn {
  display: block;
  width: 100%;
  padding: 0.5rem 1.5rem;
  border: none;
  border-radius: 6px;
  font-size: 1rem;
  text-align: center;
  text-decoration: none;
  cursor: pointer;
  background-color: #3498db;
  color: white;
}
button:hover { background-color: #2980b9; }
.download-btn { margin-top: 1rem; background-color: #27ae60; }
.download-btn:hover { background-color: #219653; }
.result-card { padding: 1.5rem; background: #f0f7ff; border-radius: 10px; border-left: 4px solid #3498db; margin-top: 1.5rem; }
.row { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }
.salary { background: #e1f0ff; padding: 1rem; border-radius: 8px; text-align: center; }
.salary h4 { margin: 0; color: #2c3e50; }
.salary h2 { margin: 0.5rem 0; color: #3498db; }
.notice { margin-top: 1rem; padding: 0.75rem; border-radius: 6px; background: #e8f8ef; color: #1e7e46; }
.notice.error { background: #fdecea; color: #b03a2e; }
"#;
