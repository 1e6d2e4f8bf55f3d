//! Static file serving
//!
//! The demo UI is small enough to embed directly, the same way the
//! server embeds its other fixed payloads. An on-disk directory can
//! override these via `WebServerConfig::static_dir`.

/// One embedded asset.
pub struct StaticAsset {
    pub content_type: &'static str,
    pub body: &'static str,
}

/// Look up an embedded asset by its `/assets/` path.
pub fn lookup(path: &str) -> Option<StaticAsset> {
    let body = match path {
        "app.js" => APP_JS,
        "style.css" => STYLE_CSS,
        _ => return None,
    };
    Some(StaticAsset {
        content_type: guess_content_type(path),
        body,
    })
}

pub fn guess_content_type(path: &str) -> &'static str {
    if path.ends_with(".js") {
        "application/javascript"
    } else if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".html") {
        "text/html"
    } else if path.ends_with(".png") {
        "image/png"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}

/// SPA shell served for `/` and `/welcome`. Routing happens in app.js;
/// the server returns the same document for both paths.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Login Demo</title>
    <link rel="stylesheet" href="/assets/style.css">
</head>
<body>
    <div id="app"></div>
    <script src="/assets/app.js"></script>
</body>
</html>
"#;

/// Client application: two views, a navigation guard, and the session
/// keys `isLoggedIn` / `user` in localStorage.
pub const APP_JS: &str = r#"// Login demo client
// Session state lives in localStorage under two keys:
//   isLoggedIn - the literal string "true" while a session is active
//   user       - JSON of { userName } for the active session

const app = document.getElementById('app')

function readSession() {
  // Storage can be disabled or the payload corrupted; both read as
  // "not authenticated" rather than throwing.
  try {
    if (localStorage.getItem('isLoggedIn') !== 'true') return null
    const raw = localStorage.getItem('user')
    if (!raw) return null
    const user = JSON.parse(raw)
    return user && typeof user.userName === 'string' ? user : null
  } catch (e) {
    console.warn('session store unavailable:', e)
    return null
  }
}

function recordLogin(user) {
  localStorage.setItem('user', JSON.stringify(user))
  localStorage.setItem('isLoggedIn', 'true')
}

function recordLogout() {
  localStorage.removeItem('isLoggedIn')
  localStorage.removeItem('user')
}

// Navigation guard: evaluated on every navigation, never cached.
function guard(path) {
  const authed = readSession() !== null
  if (path === '/welcome' && !authed) return '/'
  if (path === '/' && authed) return '/welcome'
  return path
}

function navigate(path) {
  const dest = guard(path)
  if (dest !== window.location.pathname) {
    history.pushState({}, '', dest)
  }
  render(dest)
}

function render(path) {
  if (path === '/welcome') {
    renderWelcome()
  } else {
    renderLogin()
  }
}

function renderLogin() {
  app.innerHTML = `
    <div class="container">
      <form id="login-form" class="login-form">
        <h2>Login</h2>
        <div class="form-group">
          <label for="userName">Username:</label>
          <input type="text" id="userName" required placeholder="Enter username">
        </div>
        <div class="form-group">
          <label for="password">Password:</label>
          <input type="password" id="password" required placeholder="Enter password">
        </div>
        <button type="submit" class="btn" id="login-btn">Login</button>
        <div id="error-message" class="error-message" hidden></div>
        <div class="hint">
          <strong>Login Credentials:</strong><br>
          Username: <code>admin</code><br>
          Password: <code>123</code>
        </div>
      </form>
    </div>`

  document.getElementById('login-form').addEventListener('submit', async (e) => {
    e.preventDefault()
    const btn = document.getElementById('login-btn')
    const errorBox = document.getElementById('error-message')
    btn.disabled = true
    btn.textContent = 'Logging in...'
    errorBox.hidden = true

    try {
      const response = await fetch('/api/login', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          userName: document.getElementById('userName').value,
          password: document.getElementById('password').value
        })
      })
      const data = await response.json()
      if (data.success) {
        recordLogin(data.user)
        navigate('/welcome')
        return
      }
      errorBox.textContent = data.message
      errorBox.hidden = false
    } catch (err) {
      console.error('Login error:', err)
      errorBox.textContent = 'An error occurred during login!'
      errorBox.hidden = false
    } finally {
      btn.disabled = false
      btn.textContent = 'Login'
    }
  })
}

function renderWelcome() {
  const user = readSession()
  if (!user) {
    navigate('/')
    return
  }
  app.innerHTML = `
    <div class="container">
      <div class="welcome-container">
        <h1>Welcome!</h1>
        <div class="user-info">
          <strong>Hello, ${user.userName}!</strong><br>
          <small>You have successfully logged into the system.</small>
        </div>
        <p>Welcome to the application homepage!</p>
        <button id="logout-btn" class="btn logout-btn">Logout</button>
      </div>
    </div>`

  document.getElementById('logout-btn').addEventListener('click', () => {
    recordLogout()
    navigate('/')
  })
}

window.addEventListener('popstate', () => navigate(window.location.pathname))
navigate(window.location.pathname)
"#;

pub const STYLE_CSS: &str = r#"* { box-sizing: border-box; margin: 0; padding: 0; }

body {
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
  background: #f0f2f5;
  min-height: 100vh;
}

.container {
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 100vh;
  padding: 20px;
}

.login-form, .welcome-container {
  background: #fff;
  border-radius: 8px;
  box-shadow: 0 2px 12px rgba(0, 0, 0, 0.1);
  padding: 32px;
  width: 100%;
  max-width: 380px;
}

.login-form h2, .welcome-container h1 {
  margin-bottom: 20px;
  text-align: center;
}

.form-group { margin-bottom: 16px; }

.form-group label {
  display: block;
  margin-bottom: 6px;
  font-weight: 600;
}

.form-group input {
  width: 100%;
  padding: 10px;
  border: 1px solid #ccc;
  border-radius: 4px;
  font-size: 15px;
}

.btn {
  width: 100%;
  padding: 10px;
  border: none;
  border-radius: 4px;
  background: #3273dc;
  color: #fff;
  font-size: 15px;
  cursor: pointer;
}

.btn:disabled { opacity: 0.6; cursor: wait; }

.logout-btn { background: #d9534f; margin-top: 16px; }

.error-message {
  margin-top: 12px;
  padding: 10px;
  border-radius: 4px;
  background: #fdecea;
  color: #b71c1c;
  font-size: 14px;
}

.user-info {
  margin: 16px 0;
  padding: 12px;
  border-radius: 4px;
  background: #e8f5e9;
}

.hint {
  margin-top: 20px;
  padding: 15px;
  background: #e8f4f8;
  border-radius: 5px;
  font-size: 14px;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_assets_resolve() {
        assert!(lookup("app.js").is_some());
        assert!(lookup("style.css").is_some());
        assert!(lookup("missing.js").is_none());
    }

    #[test]
    fn content_types_follow_extension() {
        assert_eq!(guess_content_type("app.js"), "application/javascript");
        assert_eq!(guess_content_type("style.css"), "text/css");
        assert_eq!(guess_content_type("blob"), "application/octet-stream");
    }

    #[test]
    fn embedded_ui_uses_the_session_contract() {
        // The embedded client must speak the same storage keys and
        // sentinel as the Rust session gate.
        assert!(APP_JS.contains("isLoggedIn"));
        assert!(APP_JS.contains("'true'"));
        assert!(APP_JS.contains("/api/login"));
        assert!(INDEX_HTML.contains("/assets/app.js"));
    }
}
