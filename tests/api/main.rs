mod laybuy_client;
