//! Dark theme with teal accents over a photo background. Served at `/`.

use super::Theme;

pub const HOME: Theme = Theme {
    key: "home",
    route: "/",
    accent: "#00CED1",
    stylesheet: STYLESHEET,
};

const STYLESHEET: &str = r#"
:root {
  --primary-color: #00CED1;
  --primary-dark: #008B8B;
  --primary-light: #AFEEEE;
  --bg-color: rgba(0, 0, 20, 0.85);
  --card-bg: rgba(10, 25, 47, 0.9);
  --border-color: #008B8B;
}
body {
  margin: 0;
  font-family: system-ui, sans-serif;
  color: var(--primary-color);
  background-image: url("https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=2070&q=80");
  background-size: cover;
  background-position: center;
  background-attachment: fixed;
}
.main-container {
  max-width: 800px;
  margin: 2rem auto;
  padding: 2rem;
  border-radius: 12px;
  background: var(--card-bg);
  box-shadow: 0 4px 30px rgba(0, 206, 209, 0.2);
  backdrop-filter: blur(5px);
  border: 1px solid var(--border-color);
}
.header { text-align: center; margin-bottom: 2rem; padding-bottom: 1rem; border-bottom: 1px solid var(--border-color); }
.header h1 { font-size: 2.5rem; margin-bottom: 0.5rem; font-weight: 700; }
.header p { color: var(--primary-light); font-size: 1.1rem; }
.form-container { padding: 1.5rem; background: var(--bg-color); border-radius: 10px; border: 1px solid var(--border-color); }
.form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
label { display: block; margin-bottom: 1rem; }
input, select {
  width: 100%;
  box-sizing: border-box;
  padding: 0.4rem;
  background-color: rgba(0, 0, 30, 0.7);
  color: var(--primary-light);
  border: 1px solid var(--border-color);
  border-radius: 4px;
}
button, .download-btn {
  display: block;
  width: 100%;
  padding: 0.7rem 1.5rem;
  border: none;
  border-radius: 6px;
  font-size: 1rem;
  font-weight: 600;
  text-align: center;
  text-decoration: none;
  cursor: pointer;
  background-color: var(--primary-dark);
  color: white;
}
button:hover { background-color: var(--primary-color); color: #000; }
.download-btn { margin-top: 1rem; background-color: var(--primary-color); color: #000; }
.download-btn:hover { background-color: var(--primary-light); }
.result-card { padding: 1.5rem; background: var(--bg-color); border-radius: 10px; border-left: 4px solid var(--primary-color); margin-top: 1.5rem; }
.row { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }
.salary { background: rgba(0, 139, 139, 0.2); padding: 1rem; border-radius: 8px; text-align: center; border: 1px solid var(--border-color); }
.salary h4 { margin: 0; color: var(--primary-light); }
.salary h2 { margin: 0.5rem 0; }
.notice { margin-top: 1rem; padding: 0.75rem; border: 1px solid var(--primary-color); border-radius: 6px; color: var(--primary-light); background: var(--card-bg); }
.notice.error { border-color: #ff6b6b; color: #ff6b6b; }
"#;
