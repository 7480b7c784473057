//! The form served at `/`.
//!
//! A single static page: language dropdown, image upload with preview, the
//! two action buttons and the output region. Initial text is Arabic, the
//! default selector value; the inline script swaps banner and button labels
//! through the locale endpoints when the dropdown changes.

pub const PAGE: &str = r##"<!DOCTYPE html>
<html lang="ar">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>🔬 كاشف الالتهاب الرئوي من صور الأشعة</title>
<style>
  body { font-family: 'Segoe UI', Tahoma, sans-serif; background: #eef4fb; margin: 0; padding: 40px 16px; }
  .container { max-width: 760px; margin: 0 auto; background: #ffffff; border: 1px solid #d3e3f8; border-radius: 12px; padding: 32px; }
  label { font-weight: bold; color: #2a4a73; }
  select, input[type=file] { display: block; width: 100%; box-sizing: border-box; margin: 8px 0 20px; padding: 10px; border: 1px solid #c4d7f2; border-radius: 8px; font-size: 15px; background: #f8fbff; }
  button { padding: 12px 24px; margin-right: 12px; border: none; border-radius: 8px; font-size: 16px; cursor: pointer; }
  #analyze-btn { background: #2563eb; color: #ffffff; }
  #reset-btn { background: #dbeafe; color: #1e3a5f; }
  .preview-box { text-align: center; }
  #preview { max-height: 300px; max-width: 100%; display: none; margin: 0 auto 20px; border-radius: 8px; }
  #output { min-height: 32px; margin: 20px 0; text-align: center; }
</style>
</head>
<body>
<div class="container">
  <label for="lang">🌐 اختر اللغة / Select Language</label>
  <select id="lang">
    <option value="العربية 🇪🇬" selected>العربية 🇪🇬</option>
    <option value="English 🇬🇧">English 🇬🇧</option>
  </select>

  <div id="title"><div style='text-align:center; font-size: 28px; font-weight: bold; margin-bottom: 10px;'>🔬 كاشف الالتهاب الرئوي من صور الأشعة</div></div>
  <div id="subtitle"><div style='text-align:center; font-size: 20px; font-weight:bold; color: #333; margin-bottom: 30px;'>استخدم النظام لتحليل أشعة الصدر واكتشاف الالتهاب خلال ثوانٍ</div></div>

  <label for="image">📤 Upload / تحميل صورة</label>
  <input type="file" id="image" accept="image/*">
  <div class="preview-box"><img id="preview" alt=""></div>

  <div id="output"></div>

  <button id="analyze-btn">🔎 تحليل الصورة</button>
  <button id="reset-btn">🔁 إعادة تعيين</button>

  <div style='margin-top: 50px; text-align: center; font-size: 16px; color: gray;'>
    <p><strong>Developed by</strong></p>
    <div style='display: flex; justify-content: center; gap: 100px; flex-wrap: wrap; margin-top: 20px;'>
      <div>
        <p><strong>Eng. Marwa Waheed</strong></p>
        <p>
          <a href='https://www.linkedin.com/in/marwa-waheed-33a249326?utm_source=share&utm_campaign=share_via&utm_content=profile&utm_medium=android_app'
             target='_blank' style='color: #0a66c2; text-decoration: none;'>
             LinkedIn Marwa
          </a>
        </p>
      </div>
      <div>
        <p><strong>Eng. Abdelaziz Diab</strong></p>
        <p>
          <a href='https://www.linkedin.com/in/abdelaziz-diab-577828344?utm_source=share&utm_campaign=share_via&utm_content=profile&utm_medium=android_app'
             target='_blank' style='color: #0a66c2; text-decoration: none;'>
             LinkedIn Abdelaziz
          </a>
        </p>
      </div>
    </div>
  </div>
</div>

<script>
const langSelect = document.getElementById('lang');
const imageInput = document.getElementById('image');
const preview = document.getElementById('preview');
const output = document.getElementById('output');
const analyzeBtn = document.getElementById('analyze-btn');
const resetBtn = document.getElementById('reset-btn');

function encodeUpload() {
  return new Promise((resolve, reject) => {
    const file = imageInput.files[0];
    if (!file) { resolve(null); return; }
    const reader = new FileReader();
    reader.onload = () => resolve(reader.result.split(',')[1]);
    reader.onerror = reject;
    reader.readAsDataURL(file);
  });
}

imageInput.addEventListener('change', () => {
  const file = imageInput.files[0];
  if (!file) { preview.style.display = 'none'; return; }
  preview.src = URL.createObjectURL(file);
  preview.style.display = 'block';
});

langSelect.addEventListener('change', async () => {
  const q = 'lang=' + encodeURIComponent(langSelect.value);
  const banner = await fetch('/api/banner?' + q).then(r => r.json());
  document.getElementById('title').innerHTML = banner.title;
  document.getElementById('subtitle').innerHTML = banner.subtitle;
  const labels = await fetch('/api/buttons?' + q).then(r => r.json());
  analyzeBtn.textContent = labels.analyze;
  resetBtn.textContent = labels.reset;
});

analyzeBtn.addEventListener('click', async () => {
  const image = await encodeUpload();
  const resp = await fetch('/api/predict', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ image: image, lang: langSelect.value })
  }).then(r => r.json());
  output.innerHTML = resp.html || resp.error || '';
});

resetBtn.addEventListener('click', async () => {
  const resp = await fetch('/api/reset', { method: 'POST' }).then(r => r.json());
  imageInput.value = '';
  preview.src = '';
  preview.style.display = 'none';
  output.innerHTML = resp.html;
});
</script>
</body>
</html>
"##;
